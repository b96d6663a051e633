use crate::domain::model::BundleKind;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// Human-readable location of `path`, used in reports and logs.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    /// Empty means every bundle.
    fn bundles(&self) -> &[BundleKind];
}
