use ndarray::Array2;


/// Global alignment of a query against a reference with linear gap costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    matrix: Array2<AlignmentMatrixEntry>,
    costs: AlignmentCosts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentMatrixEntry {
    pub cost: u64,
    pub alignment_type: BaseAlignmentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseAlignmentType {
    /// Marks the matrix origin at [0, 0].
    None,
    /// A query character aligned to a gap in the reference.
    Insertion,
    /// A reference character aligned to a gap in the query.
    Deletion,
    Match,
    Substitution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentCosts {
    pub match_cost: u64,
    pub substitution_cost: u64,
    pub insertion_cost: u64,
    pub deletion_cost: u64,
}

impl AlignmentMatrix {
    pub fn new(costs: AlignmentCosts, reference_length: usize, query_length: usize) -> Self {
        Self {
            matrix: Array2::default((reference_length + 1, query_length + 1)),
            costs,
        }
    }

    /// Fills the matrix and returns the cost of the alignment.
    pub fn align(&mut self, reference: &[u8], query: &[u8]) -> u64 {
        debug_assert_eq!(reference.len() + 1, self.matrix.nrows());
        debug_assert_eq!(query.len() + 1, self.matrix.ncols());

        self.initialise();
        for reference_index in 1..self.matrix.nrows() {
            for query_index in 1..self.matrix.ncols() {
                self.set_min_cost(reference_index, query_index, reference, query);
            }
        }

        self.matrix[[self.matrix.nrows() - 1, self.matrix.ncols() - 1]].cost
    }

    /// The alignment operations from the start to the end of both sequences.
    ///
    /// Must be called after [`Self::align`].
    pub fn traceback(&self) -> Vec<BaseAlignmentType> {
        let mut reference_index = self.matrix.nrows() - 1;
        let mut query_index = self.matrix.ncols() - 1;
        let mut operations = Vec::with_capacity(reference_index + query_index);

        loop {
            let alignment_type = self.matrix[[reference_index, query_index]].alignment_type;
            match alignment_type {
                BaseAlignmentType::None => break,
                BaseAlignmentType::Insertion => query_index -= 1,
                BaseAlignmentType::Deletion => reference_index -= 1,
                BaseAlignmentType::Match | BaseAlignmentType::Substitution => {
                    reference_index -= 1;
                    query_index -= 1;
                }
            }
            operations.push(alignment_type);
        }

        operations.reverse();
        operations
    }

    fn initialise(&mut self) {
        self.matrix[[0, 0]] = AlignmentMatrixEntry {
            cost: 0,
            alignment_type: BaseAlignmentType::None,
        };

        for reference_index in 1..self.matrix.nrows() {
            self.matrix[[reference_index, 0]] = self.compute_deletion_entry(reference_index, 0);
        }
        for query_index in 1..self.matrix.ncols() {
            self.matrix[[0, query_index]] = self.compute_insertion_entry(0, query_index);
        }
    }

    fn set_min_cost(
        &mut self,
        reference_index: usize,
        query_index: usize,
        reference: &[u8],
        query: &[u8],
    ) {
        // Handle matches and substitutions.
        let mut entry = self.compute_match_or_substitution_entry(
            reference_index,
            query_index,
            reference,
            query,
        );

        // Handle insertions.
        let insertion_entry = self.compute_insertion_entry(reference_index, query_index);
        if insertion_entry.cost < entry.cost {
            entry = insertion_entry;
        }

        // Handle deletions.
        let deletion_entry = self.compute_deletion_entry(reference_index, query_index);
        if deletion_entry.cost < entry.cost {
            entry = deletion_entry;
        }

        self.matrix[[reference_index, query_index]] = entry;
    }

    fn compute_insertion_entry(
        &self,
        reference_index: usize,
        query_index: usize,
    ) -> AlignmentMatrixEntry {
        let alignment_type = BaseAlignmentType::Insertion;
        let predecessor_cost = self.matrix[[reference_index, query_index - 1]].cost;

        AlignmentMatrixEntry {
            cost: predecessor_cost + self.costs.cost(alignment_type),
            alignment_type,
        }
    }

    fn compute_deletion_entry(
        &self,
        reference_index: usize,
        query_index: usize,
    ) -> AlignmentMatrixEntry {
        let alignment_type = BaseAlignmentType::Deletion;
        let predecessor_cost = self.matrix[[reference_index - 1, query_index]].cost;

        AlignmentMatrixEntry {
            cost: predecessor_cost + self.costs.cost(alignment_type),
            alignment_type,
        }
    }

    fn compute_match_or_substitution_entry(
        &self,
        reference_index: usize,
        query_index: usize,
        reference: &[u8],
        query: &[u8],
    ) -> AlignmentMatrixEntry {
        let alignment_type = if reference[reference_index - 1] == query[query_index - 1] {
            BaseAlignmentType::Match
        } else {
            BaseAlignmentType::Substitution
        };
        let predecessor_cost = self.matrix[[reference_index - 1, query_index - 1]].cost;

        AlignmentMatrixEntry {
            cost: predecessor_cost + self.costs.cost(alignment_type),
            alignment_type,
        }
    }
}

impl AlignmentCosts {
    pub fn cost(&self, alignment_type: BaseAlignmentType) -> u64 {
        match alignment_type {
            BaseAlignmentType::None => {
                panic!("Alignment type 'None' has no cost")
            }
            BaseAlignmentType::Insertion => self.insertion_cost,
            BaseAlignmentType::Deletion => self.deletion_cost,
            BaseAlignmentType::Match => self.match_cost,
            BaseAlignmentType::Substitution => self.substitution_cost,
        }
    }
}

impl Default for AlignmentCosts {
    fn default() -> Self {
        Self {
            match_cost: 0,
            substitution_cost: 1,
            insertion_cost: 1,
            deletion_cost: 1,
        }
    }
}

impl Default for AlignmentMatrixEntry {
    fn default() -> Self {
        Self {
            cost: u64::MAX,
            alignment_type: BaseAlignmentType::None,
        }
    }
}

impl core::fmt::Display for AlignmentMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let width = self
            .matrix
            .iter()
            .map(|entry| entry.cost.to_string().len())
            .max()
            .unwrap_or(1);

        for row in self.matrix.rows() {
            write!(f, "[ ")?;
            for entry in row {
                write!(
                    f,
                    "{: >width$}{} ",
                    entry.cost,
                    match entry.alignment_type {
                        BaseAlignmentType::None => "N",
                        BaseAlignmentType::Insertion => "I",
                        BaseAlignmentType::Deletion => "D",
                        BaseAlignmentType::Match => "M",
                        BaseAlignmentType::Substitution => "S",
                    }
                )?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
