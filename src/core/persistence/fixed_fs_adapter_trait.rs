use anyhow::Result;

/// Storage for a single fixed document (one file, one value).
pub trait FixedFsAdapterTrait<T> {
    /// Returns the stored value, or the default when nothing is stored.
    fn read(&self) -> Result<T>;

    fn insert(&self, data: &T) -> Result<()>;

    fn update(&self, data: &T) -> Result<()>;

    fn delete(&self) -> Result<()>;

    /// Whether a stored document exists, as opposed to serving defaults.
    fn exists(&self) -> bool;
}
