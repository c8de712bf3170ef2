// crates/geoselect-core/src/traits.rs
use crate::error::Result;
use crate::text::fold_key;

/// Where lookup JSON comes from.
///
/// Implementations must not cache: every call is expected to hit the
/// underlying resource again, so a reload always sees fresh data. A resource
/// that answers with a non-success status maps to
/// [`GeoError::Fetch`](crate::GeoError::Fetch).
///
/// The controller awaits one fetch at a time and never requires `Send`
/// futures, which keeps the browser `fetch` binding usable.
#[allow(async_fn_in_trait)]
pub trait LookupSource {
    /// Returns the raw body of `resource` (e.g. `"countries.json"`).
    async fn fetch(&self, resource: &str) -> Result<String>;
}

/// A persistent key-value slot, shaped after `window.localStorage`.
pub trait SelectionStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrites the whole value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<T: LookupSource> LookupSource for &T {
    async fn fetch(&self, resource: &str) -> Result<String> {
        (**self).fetch(resource).await
    }
}

impl<T: SelectionStore + ?Sized> SelectionStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons are accent-insensitive and case-insensitive, based on
/// [`fold_key`].
///
/// # Examples
/// ```rust
/// use geoselect_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Łódź").is_named("lodz"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}
