mod error;
pub use error::*;

mod sorting;
pub use sorting::*;

mod component;
pub use component::*;

mod keys;
pub use keys::*;

mod order;
pub use order::*;

mod options;
pub use options::*;

mod model;
pub use model::*;

mod scope;
pub use scope::*;

use std::collections::BTreeMap;
use std::fmt::Result as FmtResult;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context as AnyhowContext;
use anyhow::{bail, Result};

use serde::{Deserialize, Serialize};

use bson::{Bson, Document};

use derivative::Derivative;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};
use typed_builder::TypedBuilder as Builder;

fn default<T: Default>() -> T {
    T::default()
}
