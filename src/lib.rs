pub mod fetch;
pub mod normalize;
pub mod plot;
pub mod population;
pub mod table;

pub use fetch::CovidStats;
pub use normalize::normalize;
pub use plot::draw;
pub use table::CaseTable;
