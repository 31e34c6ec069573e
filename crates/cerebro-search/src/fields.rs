//! Per-kind projection of an item onto the fields the matchers and the
//! scorer read.
//!
//! The only place that branches on item kind for text access; everything
//! downstream works on [`SearchableFields`].

use cerebro_core::enrichment::Enrichment;
use cerebro_core::entities::SearchableItem;
use cerebro_core::enums::ItemKind;

/// A fetched item together with its decoded enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    item: SearchableItem,
    enrichment: Enrichment,
}

impl Candidate {
    /// Decode the item's enrichment payload once. Never fails.
    #[must_use]
    pub fn new(item: SearchableItem) -> Self {
        let enrichment = Enrichment::decode(item.enrichment());
        Self { item, enrichment }
    }

    #[must_use]
    pub const fn item(&self) -> &SearchableItem {
        &self.item
    }

    #[must_use]
    pub const fn enrichment(&self) -> &Enrichment {
        &self.enrichment
    }

    #[must_use]
    pub fn fields(&self) -> SearchableFields<'_> {
        SearchableFields::project(&self.item, &self.enrichment)
    }
}

/// Borrowed view of everything searchable on one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableFields<'a> {
    pub kind: ItemKind,
    /// Enrichment title, else the item's own title, else its filename.
    pub title: Option<&'a str>,
    pub enrichment_title: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub topics: &'a [String],
    pub keywords: &'a [String],
    pub category: Option<&'a str>,
    /// The stored `topic` column.
    pub topic: Option<&'a str>,
    /// Filename and URL, scored as a weak fallback signal.
    pub locators: Vec<&'a str>,
    /// Raw stored text columns (content, url, title, filename, path,
    /// metadata, transcription) for substring matching.
    pub texts: Vec<&'a str>,
}

impl<'a> SearchableFields<'a> {
    #[must_use]
    pub fn project(item: &'a SearchableItem, enrichment: &'a Enrichment) -> Self {
        let (own_title, locators, texts): (Option<&str>, Vec<&str>, Vec<&str>) = match item {
            SearchableItem::Note(n) => (None, Vec::new(), vec![n.content.as_str()]),
            SearchableItem::Link(l) => (
                l.title.as_deref(),
                vec![l.url.as_str()],
                [Some(l.url.as_str()), l.title.as_deref(), l.metadata.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect(),
            ),
            SearchableItem::File(f) => (
                Some(f.filename.as_str()),
                vec![f.filename.as_str()],
                vec![f.filename.as_str(), f.file_path.as_str()],
            ),
            SearchableItem::Photo(p) => (
                Some(p.filename.as_str()),
                vec![p.filename.as_str()],
                vec![p.filename.as_str(), p.file_path.as_str()],
            ),
            SearchableItem::Audio(a) => (
                None,
                Vec::new(),
                [Some(a.file_path.as_str()), a.transcription.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect(),
            ),
            SearchableItem::Video(v) => (
                v.title.as_deref(),
                Vec::new(),
                [v.title.as_deref(), Some(v.file_path.as_str())]
                    .into_iter()
                    .flatten()
                    .collect(),
            ),
        };

        let enrichment_title = enrichment.title.as_deref();
        Self {
            kind: item.kind(),
            title: enrichment_title.or(own_title).filter(|t| !t.trim().is_empty()),
            enrichment_title,
            summary: enrichment.summary.as_deref(),
            topics: &enrichment.topics,
            keywords: &enrichment.keywords,
            category: enrichment.category.as_deref(),
            topic: item.topic().filter(|t| !t.trim().is_empty()),
            locators,
            texts,
        }
    }
}
