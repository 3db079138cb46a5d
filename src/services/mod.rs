pub(crate) mod analyzer;
pub(crate) mod bilingual;
pub(crate) mod candidate;
pub(crate) mod option_rows;
pub(crate) mod page_fetcher;
pub(crate) mod part_urls;
pub(crate) mod question_assembly;
pub(crate) mod question_blocks;
pub(crate) mod scoring;
