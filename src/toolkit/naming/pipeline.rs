

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::creative::CreativeGenerator;
use super::expander::SemanticExpander;
use super::meaningful::MeaningfulGenerator;
use super::models::{GenerationOptions, NamePool};
use super::thesaurus::{SynonymSource, Thesaurus};
use crate::core::config::BraionConfig;
use crate::core::error::Result;
use crate::llm::factory::RankerFactory;
use crate::llm::ranking::{NameRanker, RankingContext};

/// Runs both generators, then the optional ranker over their union.
pub struct NamePipeline {
    meaningful: MeaningfulGenerator,
    creative: CreativeGenerator,
    ranker: Option<Arc<dyn NameRanker>>,
    default_use_llm: bool,
}

impl NamePipeline {
    pub fn new(synonyms: Arc<dyn SynonymSource>) -> Self {
        Self {
            meaningful: MeaningfulGenerator::new(SemanticExpander::new(synonyms)),
            creative: CreativeGenerator::new(),
            ranker: None,
            default_use_llm: false,
        }
    }


    pub fn with_ranker(mut self, ranker: Arc<dyn NameRanker>) -> Self {
        self.ranker = Some(ranker);
        self
    }


    pub fn with_default_use_llm(mut self, use_llm: bool) -> Self {
        self.default_use_llm = use_llm;
        self
    }

    /// Fails when a configured thesaurus file cannot be loaded or the
    /// ranker settings are invalid.
    pub fn from_config(config: &BraionConfig) -> Result<Self> {
        let thesaurus = Thesaurus::load(config.thesaurus_path.as_deref())?;
        let ranker = RankerFactory::from_config(config)?;

        info!(
            "NamePipeline initialized: thesaurus={} words, ranker={}, use_llm={}",
            thesaurus.len(),
            ranker.ranker_name(),
            config.use_llm
        );

        let synonyms: Arc<dyn SynonymSource> = Arc::new(thesaurus);
        Ok(Self::new(synonyms)
            .with_ranker(ranker)
            .with_default_use_llm(config.use_llm))
    }


    pub fn default_use_llm(&self) -> bool {
        self.default_use_llm
    }


    pub async fn generate(&self, concepts: &[String], options: &GenerationOptions) -> NamePool {
        let pool = {
            let mut rng = StdRng::from_entropy();
            self.candidates(concepts, options, &mut rng)
        };
        self.rerank(concepts, options, pool).await
    }


    pub async fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        concepts: &[String],
        options: &GenerationOptions,
        rng: &mut R,
    ) -> NamePool {
        let pool = self.candidates(concepts, options, rng);
        self.rerank(concepts, options, pool).await
    }

    /// Unranked output of both generators, `count / 2` each.
    pub fn candidates<R: Rng + ?Sized>(
        &self,
        concepts: &[String],
        options: &GenerationOptions,
        rng: &mut R,
    ) -> NamePool {
        let per_bucket = options.per_bucket();
        let domain = options.domain.as_deref();

        let meaningful = self.meaningful.generate(
            concepts,
            domain,
            options.custom_prompt.as_deref(),
            &options.tone,
            per_bucket,
            rng,
        );
        let creative = self.creative.generate(domain, &options.tone, per_bucket, rng);

        debug!(
            "Candidates: {} meaningful, {} creative (per bucket {})",
            meaningful.len(),
            creative.len(),
            per_bucket
        );
        NamePool { meaningful, creative }
    }

    async fn rerank(&self, concepts: &[String], options: &GenerationOptions, pool: NamePool) -> NamePool {
        if !options.use_llm {
            return pool;
        }
        let Some(ranker) = &self.ranker else {
            debug!("No ranker configured, keeping generation order");
            return pool;
        };

        let context = RankingContext {
            concepts: concepts.to_vec(),
            project_context: options.project_context.clone(),
            custom_prompt: options.custom_prompt.clone(),
            tone: Some(options.tone.to_string()),
            domain: options.domain.clone(),
        };
        if !context.has_guidance() {
            debug!("No project context or custom prompt, skipping ranking");
            return pool;
        }

        let combined = pool.combined();
        match ranker.rank(&context, &combined, options.count).await {
            Ok(ranked) => {
                info!("Ranked {} candidates with {}", combined.len(), ranker.ranker_name());
                redistribute(&ranked, &pool, options.per_bucket())
            }
            Err(e) => {
                warn!("Ranking failed, keeping unranked names: {}", e);
                pool
            }
        }
    }
}

/// Sorts ranked names back into their original buckets. A name present in
/// both buckets lands in `meaningful` only.
fn redistribute(ranked: &[String], original: &NamePool, per_bucket: usize) -> NamePool {
    let mut pool = NamePool::default();
    for name in ranked {
        if original.meaningful.contains(name) {
            if pool.meaningful.len() < per_bucket && !pool.meaningful.contains(name) {
                pool.meaningful.push(name.clone());
            }
        } else if original.creative.contains(name)
            && pool.creative.len() < per_bucket
            && !pool.creative.contains(name)
        {
            pool.creative.push(name.clone());
        }
    }
    pool
}
