pub mod graph_index;
pub mod path_enumerator;
pub mod path_selector;
pub mod report;
