//! Provider routing gateway

use super::gemini::GeminiAdapter;
use super::openai::OpenAiAdapter;
use super::{AdapterCall, ProviderAdapter, http};
use async_trait::async_trait;
use std::sync::Arc;
use tailor_application::{CompletionGateway, CompletionRequest, GatewayError};
use tailor_domain::{ProviderConfig, ProviderKind};
use tracing::debug;

/// Gateway that dispatches each call to one of several back ends.
///
/// Routing priority:
///  1. the run's provider override
///  2. the configured default provider
pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    default_kind: ProviderKind,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>, default_kind: ProviderKind) -> Self {
        Self {
            providers,
            default_kind,
        }
    }

    /// Build the OpenAI and Gemini adapters from resolved provider settings.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, GatewayError> {
        let client = http::build_client(config.timeout_secs)?;
        let providers: Vec<Arc<dyn ProviderAdapter>> = vec![
            Arc::new(OpenAiAdapter::new(config.openai.clone(), client.clone())),
            Arc::new(GeminiAdapter::new(config.gemini.clone(), client)),
        ];
        Ok(Self::new(providers, config.default))
    }

    fn resolve_provider(
        &self,
        requested: Option<ProviderKind>,
    ) -> Result<&dyn ProviderAdapter, GatewayError> {
        let kind = requested.unwrap_or(self.default_kind);
        self.providers
            .iter()
            .find(|p| p.kind() == kind)
            .map(|p| p.as_ref())
            .ok_or_else(|| GatewayError::Other(format!("No adapter registered for {}", kind)))
    }
}

#[async_trait]
impl CompletionGateway for RoutingGateway {
    fn is_enabled(&self) -> bool {
        self.providers.iter().any(|p| p.has_credential())
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, GatewayError> {
        let adapter = self.resolve_provider(request.overrides.provider)?;
        debug!(provider = %adapter.kind(), "Routing completion");

        adapter
            .complete(AdapterCall {
                system_prompt: request.system_prompt,
                user_prompt: request.user_prompt,
                credential: request.overrides.credential.as_deref(),
                model: request.overrides.model.as_deref(),
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tailor_domain::CompletionOverrides;

    // -- Mock ProviderAdapter --------------------------------------------------

    struct MockProvider {
        kind: ProviderKind,
        keyed: bool,
        seen: Mutex<Vec<(Option<String>, Option<String>)>>,
    }

    impl MockProvider {
        fn new(kind: ProviderKind, keyed: bool) -> Arc<Self> {
            Arc::new(Self {
                kind,
                keyed,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ProviderAdapter for MockProvider {
        fn kind(&self) -> ProviderKind {
            self.kind
        }

        fn has_credential(&self) -> bool {
            self.keyed
        }

        async fn complete(&self, call: AdapterCall<'_>) -> Result<String, GatewayError> {
            self.seen.lock().unwrap().push((
                call.credential.map(String::from),
                call.model.map(String::from),
            ));
            Ok(format!("{}:{}", self.kind, call.user_prompt))
        }
    }

    // -- Helpers ---------------------------------------------------------------

    fn gateway(
        openai_keyed: bool,
        gemini_keyed: bool,
        default_kind: ProviderKind,
    ) -> (RoutingGateway, Arc<MockProvider>, Arc<MockProvider>) {
        let openai = MockProvider::new(ProviderKind::OpenAi, openai_keyed);
        let gemini = MockProvider::new(ProviderKind::Gemini, gemini_keyed);
        let providers: Vec<Arc<dyn ProviderAdapter>> = vec![openai.clone(), gemini.clone()];
        (
            RoutingGateway::new(providers, default_kind),
            openai,
            gemini,
        )
    }

    async fn complete(
        gateway: &RoutingGateway,
        overrides: &CompletionOverrides,
    ) -> Result<String, GatewayError> {
        gateway
            .complete(CompletionRequest {
                system_prompt: "sys",
                user_prompt: "hello",
                overrides,
            })
            .await
    }

    // -- Tests -----------------------------------------------------------------

    #[tokio::test]
    async fn test_routes_to_default() {
        let (gateway, _, _) = gateway(true, true, ProviderKind::Gemini);
        let text = complete(&gateway, &CompletionOverrides::default())
            .await
            .unwrap();
        assert_eq!(text, "gemini:hello");
    }

    #[tokio::test]
    async fn test_override_beats_default() {
        let (gateway, _, _) = gateway(true, true, ProviderKind::Gemini);
        let overrides = CompletionOverrides {
            provider: Some(ProviderKind::OpenAi),
            ..Default::default()
        };
        assert_eq!(complete(&gateway, &overrides).await.unwrap(), "openai:hello");
    }

    #[tokio::test]
    async fn test_forwards_credential_and_model() {
        let (gateway, openai, _) = gateway(false, false, ProviderKind::OpenAi);
        let overrides = CompletionOverrides {
            credential: Some("sk-run".to_string()),
            provider: None,
            model: Some("gpt-5-mini".to_string()),
        };
        complete(&gateway, &overrides).await.unwrap();

        let seen = openai.seen.lock().unwrap();
        assert_eq!(
            seen.as_slice(),
            &[(Some("sk-run".to_string()), Some("gpt-5-mini".to_string()))]
        );
    }

    #[test]
    fn test_enabled_when_any_adapter_has_key() {
        assert!(!gateway(false, false, ProviderKind::OpenAi).0.is_enabled());
        assert!(gateway(false, true, ProviderKind::OpenAi).0.is_enabled());
        assert!(gateway(true, false, ProviderKind::Gemini).0.is_enabled());
    }

    #[tokio::test]
    async fn test_missing_adapter() {
        let gemini = MockProvider::new(ProviderKind::Gemini, true);
        let providers: Vec<Arc<dyn ProviderAdapter>> = vec![gemini];
        let gateway = RoutingGateway::new(providers, ProviderKind::OpenAi);
        let err = complete(&gateway, &CompletionOverrides::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Other(_)));
    }

    #[test]
    fn test_from_config_reads_keys() {
        let mut config = ProviderConfig::default();
        assert!(!RoutingGateway::from_config(&config).unwrap().is_enabled());

        config.gemini.api_key = Some("g-key".to_string());
        assert!(RoutingGateway::from_config(&config).unwrap().is_enabled());
    }
}
