use crate::{Translations, VerseMetadata, VerseResponse, VerseText};

/// Assembles lookup and language results into the outward-facing record.
pub trait ResponseFormatter: Send + Sync {
    fn format(
        &self,
        metadata: VerseMetadata,
        verse_text: VerseText,
        translations: Translations,
    ) -> VerseResponse;
}

/// Field-for-field assembly; trusts its inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct VerseFormatter;

impl ResponseFormatter for VerseFormatter {
    fn format(
        &self,
        metadata: VerseMetadata,
        verse_text: VerseText,
        translations: Translations,
    ) -> VerseResponse {
        VerseResponse {
            verse_id: metadata.verse_id,
            book: metadata.book,
            chapter: metadata.chapter,
            verse_number: metadata.verse_number,
            text: verse_text.text,
            language: verse_text.language,
            translations,
        }
    }
}
