mod search;

pub use search::SearchPath;
