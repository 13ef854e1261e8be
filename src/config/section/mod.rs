//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitemap.toml`:
//!
//! | Module         | TOML Section      | Purpose                                |
//! |----------------|-------------------|----------------------------------------|
//! | `site`         | `[site]`          | Site origin                            |
//! | `sitemap`      | `[sitemap]`       | Exclusions, chunking, entry defaults   |
//! | `robots`       | `[robots]`        | robots.txt policies                    |
//! | `integrations` | `[integrations]`  | Integrations slug source               |
//! | `build`        | `[build]`         | Export directory, minification         |

mod build;
mod integrations;
mod robots;
mod site;
mod sitemap;

pub use build::BuildSectionConfig;
pub use integrations::IntegrationsSectionConfig;
pub use robots::{RobotsPolicy, RobotsTxtOptions};
pub use site::SiteSectionConfig;
pub use sitemap::{ChangeFreq, SitemapSectionConfig};
#[cfg(test)]
pub use sitemap::{DEFAULT_EXCLUDE, default_exclude};
