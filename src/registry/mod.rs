//! Registry - the generic engine behind every stateful collection in the crate.
//!
//! A [`Registry`] owns an insertion-ordered list of records, an identity
//! counter and a mutation journal. Nothing outside the registry can reach
//! the list: every read hands back clones.
//!
//! ## Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use stateful_registry::{impl_record, Registry};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Tiffin {
//!     id: u64,
//!     dish: String,
//! }
//!
//! impl_record!(Tiffin, "tiffin", id: u64);
//!
//! let mut tiffins = Registry::<Tiffin>::new();
//! let id = tiffins.allocate(|id| Tiffin { id, dish: "dal".into() }).unwrap();
//! assert_eq!(id, 1);
//! assert_eq!(tiffins.all().len(), 1);
//! ```

mod counter;
mod rate;
#[allow(clippy::module_inception)]
mod registry;

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

pub use rate::percentage;
pub use registry::Registry;

/// Journal event names written by [`Registry`].
pub mod events {
    pub const ADDED: &str = "Added";
    pub const ADVANCED: &str = "Advanced";
    pub const REMOVED: &str = "Removed";
    pub const RESET: &str = "Reset";
}

/// A value stored in a [`Registry`], identified by a unique key.
pub trait Record: Serialize + DeserializeOwned + Clone {
    type Key: Clone + PartialEq + fmt::Display + Serialize + DeserializeOwned;

    /// Human-readable record kind used in errors and logs ("delivery", "voter").
    const KIND: &'static str;

    fn key(&self) -> &Self::Key;
}

/// A record with a lifecycle stage that only ever moves forward.
pub trait Staged: Record {
    type Stage: Copy + Ord + fmt::Debug;

    fn stage(&self) -> Self::Stage;
    fn set_stage(&mut self, stage: Self::Stage);
}

#[macro_export]
macro_rules! impl_record {
    ($ty:ty, $kind:literal, $key_field:ident: $key:ty) => {
        impl $crate::Record for $ty {
            type Key = $key;
            const KIND: &'static str = $kind;

            fn key(&self) -> &Self::Key {
                &self.$key_field
            }
        }
    };
    ($ty:ty, $kind:literal, $key_field:ident: $key:ty, $stage_field:ident: $stage:ty) => {
        $crate::impl_record!($ty, $kind, $key_field: $key);

        impl $crate::Staged for $ty {
            type Stage = $stage;

            fn stage(&self) -> Self::Stage {
                self.$stage_field
            }

            fn set_stage(&mut self, stage: Self::Stage) {
                self.$stage_field = stage;
            }
        }
    };
}
