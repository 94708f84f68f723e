pub mod config {
    pub use pasture_core::config::*;
}
pub mod grid {
    pub use pasture_core::grid::*;
}
pub mod snapshot {
    pub use pasture_core::snapshot::*;
}
pub mod history {
    pub use pasture_io::history::*;
}
pub mod state {
    pub use pasture_data::*;
}

pub mod world;
