//! 品牌目录模块
//!
//! - [`BrandCatalog`] - 内存品牌存储 (读取、合并更新、创建)
//! - [`editor`] - 落地页编辑操作
//! - [`wizard`] - 创建品牌向导与模板
//! - [`Fixtures`] - 编译期嵌入的种子数据

pub mod editor;
pub mod fixtures;
pub mod store;
pub mod wizard;

pub use fixtures::{Fixtures, Records};
pub use store::BrandCatalog;
pub use wizard::{BrandDraft, BrandTemplate, SlabSummary, TEMPLATES, slab_summaries};
