pub mod key;
pub mod keyset;
pub mod metadata;

pub use key::Key;
pub use keyset::KeySet;
pub use metadata::{MetaEntry, Metadata};
