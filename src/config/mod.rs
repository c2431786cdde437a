//! Field table configuration file.
//!
//! A project can describe its own field table in `envcreate.yaml`:
//!
//! ```yaml
//! salt_length: 64
//! salt_keys: [AUTH_KEY]
//! fields:
//!   - key: APP_ENV
//!     type: ask_and_validate
//!     question: Environment
//!     default: production
//!   - key: APP_URL
//!     type: ask
//!     question: Site URL
//!     default_template: "http://${dir_name}.test"
//!     derive:
//!       - key: ASSET_URL
//!         template: "${APP_URL}/assets"
//!   - key: AUTH_KEY
//!     default: ""
//! ```
//!
//! Unknown fields in the YAML are ignored for forward compatibility.

mod model;
mod operations;
mod template;


pub use model::{DeriveConfig, FieldConfig, RequiresConfig, TableConfig};
pub use template::{DIR_NAME, DIR_SLUG, Template};

/// Config filename looked up in the base directory.
pub const DEFAULT_CONFIG_FILE: &str = "envcreate.yaml";
