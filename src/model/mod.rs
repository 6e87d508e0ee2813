pub use protocell_core::{ApproximatorLogic, Vitals};
pub mod brain {
    pub use protocell_core::brain::*;
}
pub mod cell {
    pub use protocell_core::cell::*;
}
pub mod config {
    pub use protocell_core::config::*;
}
pub mod fitness {
    pub use protocell_core::fitness::*;
}
pub mod metrics {
    pub use protocell_core::metrics::*;
}
pub mod state {
    pub use protocell_data::*;
}
