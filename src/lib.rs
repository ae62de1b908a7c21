pub use almanac_api as api;
pub use almanac_domain as domain;
pub use almanac_infra as infra;
