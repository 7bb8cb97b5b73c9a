//! Embedded reference tables
//!
//! Word tables compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/common_words.rs"));
include!(concat!(env!("OUT_DIR"), "/short_words.rs"));
