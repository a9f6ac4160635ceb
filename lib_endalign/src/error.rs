use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}.")]
    Io(#[from] std::io::Error),

    #[error("The configuration could not be parsed: {0}.")]
    TomlParse(#[from] toml::de::Error),

    #[error("The configuration value {name} is {value}, but it must be at least {minimum}.")]
    ConfigValueTooSmall {
        name: &'static str,
        value: usize,
        minimum: usize,
    },

    #[error(
        "Row {row} of the aligned matrix has {actual} columns, but the first row has {expected}."
    )]
    InconsistentColumnCount {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("The alignment engine returned {actual} rows for {expected} sequences.")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error(
        "Row {row} of the aligned matrix contains {actual} non-gap characters, but its sequence has length {expected}."
    )]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error(
        "Scanning row {row} visited {actual} non-gap characters, but the row has length {expected}."
    )]
    ScanLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error(
        "The shared sequence at end {end} row {row} has length {length}, but its continuation at end {continuation_end} row {continuation_row} has length {continuation_length}."
    )]
    SharedSequenceLengthMismatch {
        end: usize,
        row: usize,
        length: usize,
        continuation_end: usize,
        continuation_row: usize,
        continuation_length: usize,
    },

    #[error("The aligned group has {rows} rows, but {origins} row origins were given.")]
    OriginCountMismatch { rows: usize, origins: usize },

    #[error("There are {groups} aligned groups, but the adjacency table has {ends} ends.")]
    AdjacencyEndCountMismatch { groups: usize, ends: usize },

    #[error(
        "End {end} has {group_rows} aligned rows, but the adjacency table has {adjacency_rows} rows for it."
    )]
    AdjacencyRowCountMismatch {
        end: usize,
        group_rows: usize,
        adjacency_rows: usize,
    },

    #[error("The sequence identity {identity} is incident to more than one end position.")]
    DuplicateSequenceIdentity { identity: String },

    #[error("The continuation {continuation} of end {end} row {row} is not incident to any end.")]
    UnknownContinuation {
        end: usize,
        row: usize,
        continuation: String,
    },

    #[error(
        "End {end} row {row} continues into end {continuation_end} row {continuation_row}, but that does not continue back."
    )]
    AsymmetricContinuation {
        end: usize,
        row: usize,
        continuation_end: usize,
        continuation_row: usize,
    },
}
