//! Guarded, memoized analysis calls.

use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tallyboard_shared::AnalysisConfig;

use super::error::AnalysisError;
use super::gemini::GeminiClient;
use super::generator::TextGenerator;
use super::prompt::{effort_prompt, finance_prompt};
use crate::cache::DashboardCache;
use crate::effort::EffortEstimate;
use crate::fingerprint::{Fingerprint, of_parts};
use crate::ledger::{ExpenseCategory, Ledger};
use crate::summary::Aggregator;

const MISSING_CREDENTIAL_MESSAGE: &str =
    "⚠️ Chave de API da Google não fornecida. Insira a chave na barra lateral para análise.";

const EMPTY_LEDGER_MESSAGE: &str =
    "⚠️ Nenhum lançamento registrado. Adicione despesas para gerar a análise.";

/// How an analysis request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    /// The model answered; the text is its response.
    Generated,
    /// No credential was available; nothing was sent.
    MissingCredential,
    /// There was nothing to analyse; nothing was sent.
    EmptyLedger,
    /// The call failed; the text is a diagnostic.
    Error,
}

/// Text to display in the analysis panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Outcome.
    pub status: AnalysisStatus,
    /// Model response, fixed warning or diagnostic.
    pub text: String,
    /// True when the text came from the cache.
    pub cached: bool,
}

impl AnalysisReport {
    fn notice(status: AnalysisStatus, text: &str) -> Self {
        Self {
            status,
            text: text.to_string(),
            cached: false,
        }
    }

    fn failed(error: &AnalysisError) -> Self {
        let text = if error.is_provider_error() {
            format!(
                "🚨 Erro na API do Google GenAI: Verifique sua chave de API ou as permissões. Detalhes: {error}"
            )
        } else {
            format!("🚨 Ocorreu um erro inesperado na chamada da IA: {error}")
        };
        Self {
            status: AnalysisStatus::Error,
            text,
            cached: false,
        }
    }
}

/// A configured text generator plus the identity used in cache keys.
#[derive(Clone)]
pub struct Analyst {
    generator: Arc<dyn TextGenerator>,
    identity: String,
}

impl Analyst {
    /// Wraps a generator. `credential` only contributes a hash to the identity.
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, credential: &str) -> Self {
        let identity = of_parts(&[generator.model(), credential]);
        Self {
            generator,
            identity,
        }
    }

    /// Gemini analyst for the configured key, if any.
    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Option<Self> {
        config
            .credential()
            .map(|key| Self::gemini(config, key))
    }

    /// Gemini analyst for an explicit key, using the configured model and endpoint.
    #[must_use]
    pub fn gemini(config: &AnalysisConfig, api_key: &str) -> Self {
        let client = GeminiClient::new(api_key)
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone());
        Self::new(Arc::new(client), api_key)
    }

    /// Model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        self.generator.model()
    }
}

impl std::fmt::Debug for Analyst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyst")
            .field("model", &self.generator.model())
            .finish_non_exhaustive()
    }
}

/// What to analyse: the prompt, its content fingerprint and the empty guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSubject {
    prompt: String,
    fingerprint: String,
    is_empty: bool,
}

impl AnalysisSubject {
    /// Effort breakdown for one hour budget.
    ///
    /// An estimate always carries every phase, so it is never empty.
    #[must_use]
    pub fn effort(estimate: &EffortEstimate) -> Self {
        Self {
            prompt: effort_prompt(estimate),
            fingerprint: of_parts(&["effort", estimate.hours_budget.to_string().as_str()]),
            is_empty: false,
        }
    }

    /// Expense ledger against the monthly income.
    #[must_use]
    pub fn finance(ledger: &Ledger<ExpenseCategory>, income: Decimal) -> Self {
        let summary = Aggregator::summarize_finance(ledger, income);
        let mut fingerprint = Fingerprint::new();
        fingerprint
            .push("finance")
            .push(&ledger.content_hash())
            .push(&income.normalize().to_string());

        Self {
            prompt: finance_prompt(&summary),
            fingerprint: fingerprint.finish(),
            is_empty: ledger.is_empty(),
        }
    }

    /// The prompt that will be sent.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Content fingerprint of the analysed data.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// True when there is nothing to analyse.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_empty
    }
}

/// Runs analyses behind the credential and empty-data guards.
#[derive(Clone, Default)]
pub struct AnalysisService {
    cache: DashboardCache,
}

impl AnalysisService {
    /// Creates a service memoizing into `cache`.
    #[must_use]
    pub const fn new(cache: DashboardCache) -> Self {
        Self { cache }
    }

    /// Produces the analysis text for `subject`.
    ///
    /// Without an analyst or with no data the fixed warning is returned and
    /// no request is made. Failures become diagnostic text and are not cached.
    pub async fn analyze(
        &self,
        analyst: Option<&Analyst>,
        subject: &AnalysisSubject,
    ) -> AnalysisReport {
        let Some(analyst) = analyst else {
            tracing::debug!("Analysis skipped: no credential");
            return AnalysisReport::notice(
                AnalysisStatus::MissingCredential,
                MISSING_CREDENTIAL_MESSAGE,
            );
        };
        if subject.is_empty() {
            tracing::debug!("Analysis skipped: empty ledger");
            return AnalysisReport::notice(AnalysisStatus::EmptyLedger, EMPTY_LEDGER_MESSAGE);
        }

        let key = of_parts(&[
            "analysis",
            subject.fingerprint.as_str(),
            analyst.identity.as_str(),
        ]);
        if let Some(text) = self.cache.analysis(&key) {
            tracing::debug!(model = analyst.model(), "Analysis served from cache");
            return AnalysisReport {
                status: AnalysisStatus::Generated,
                text: text.to_string(),
                cached: true,
            };
        }

        match analyst.generator.generate(&subject.prompt).await {
            Ok(text) => {
                self.cache.store_analysis(key, &text);
                AnalysisReport {
                    status: AnalysisStatus::Generated,
                    text,
                    cached: false,
                }
            }
            Err(error) => {
                tracing::error!(model = analyst.model(), error = %error, "Analysis failed");
                AnalysisReport::failed(&error)
            }
        }
    }
}
