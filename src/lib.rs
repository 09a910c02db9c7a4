pub mod directory;
pub mod error;
pub mod filter;
pub mod location;
pub mod map;
pub mod map_mock;
pub mod models;
pub mod notify;
pub mod parse;
pub mod partner;
pub mod render;
pub mod roi;
pub mod seed;

pub use directory::DirectoryState;
pub use error::{DirectoryError, FeedError, LocateError, RoiError};
pub use filter::FilterCriteria;
pub use location::LocationService;
pub use map::{MapCamera, MapSurface, MarkerIcon, MarkerId, MarkerSpec};
pub use models::{
    Availability, ChargerType, Coordinates, Distance, DistanceUnit, Price, Pricing, Station,
    StationId,
};
pub use notify::{Notifier, Severity};
pub use partner::{PartnerApplication, PartnerField, ValidationReport};
pub use roi::{estimate, Payback, RoiEstimate, SiteCategory};
pub use seed::sample_stations;
