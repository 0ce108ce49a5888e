pub mod analysis;
pub mod corpus;
pub mod error;
pub mod offsets;
pub mod report;

pub use analysis::{derive_fields, enrich_analysis, EnrichMode};
pub use corpus::{enrich_file, enrich_path, EnrichOptions};
pub use error::CorpusError;
pub use offsets::{index_words, OffsetStats};
pub use report::{EnrichReport, RunSummary};

use glossa_protocol::Corpus;

/// Primary entry point: one in-memory pass over a whole document.
///
/// Word indexing runs before analysis enrichment within each sentence, but the
/// two never read each other's output. Running the pass again on its own
/// result changes nothing.
pub fn enrich_corpus(corpus: &mut Corpus, mode: EnrichMode) -> EnrichReport {
    let fields = mode.fields();
    let mut report = EnrichReport::default();

    for sentence in corpus.sentences_mut() {
        report.sentences += 1;
        if mode.indexes_words() {
            report.record_offsets(index_words(sentence));
        }
        for word in sentence.words_mut() {
            for analysis in word.analyses_mut() {
                report.record_analysis(enrich_analysis(analysis, fields));
            }
        }
    }

    report
}
