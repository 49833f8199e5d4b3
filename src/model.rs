mod result_set;
mod run;
mod step;


pub use result_set::{Connectivity, ResultSet};
pub use run::{RunPair, ViewResult};
pub use step::{
    BlinkFeatures, ChromeUserTiming, ContentBreakdown, DomainStats, Images, Pages, RawData,
    Step, Thumbnails, UserTimingMeasure,
};
