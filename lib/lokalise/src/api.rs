//! Entry point handing out one service per resource.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tower::Layer;

use crate::config::{ClientConfig, ClientConfigBuilder};
use crate::middleware::RetryCondition;
use crate::rest::Rest;
use crate::service::ServiceBase;
use crate::services::{
    BranchService, CommentService, ContributorService, FileService, KeyService, LanguageService,
    OrderService, PaymentCardService, ProjectService, QueuedProcessService, ScreenshotService,
    SegmentService, SnapshotService, TaskService, TeamService, TeamUserService,
    TranslationProviderService, TranslationService, TranslationStatusService, UserGroupService,
    WebhookService,
};
use crate::transport::{BoxedService, HttpTransport, HttpTransportBuilder};
use crate::{Error, Request, Response, Result};

type TransportStep = Box<dyn FnOnce(HttpTransportBuilder) -> HttpTransportBuilder + Send>;

/// Handle on the API.
///
/// Cloning is cheap; clones share the transport and its connection pool.
///
/// ```ignore
/// let api = Api::new("my-token")?;
/// let project = api.projects().retrieve("123.abc").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Api {
    rest: Arc<Rest>,
    page_limit: u32,
}

impl Api {
    /// Create a client with the default configuration.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Create a client builder.
    #[must_use]
    pub fn builder(token: impl Into<String>) -> ApiBuilder {
        ApiBuilder {
            token: token.into(),
            config: ClientConfig::builder(),
            steps: Vec::new(),
        }
    }

    /// Create a client over an already built transport.
    #[must_use]
    pub fn from_transport(transport: HttpTransport) -> Self {
        let page_limit = transport.config().page_limit;
        Self {
            rest: Arc::new(Rest::new(transport)),
            page_limit,
        }
    }

    /// Shared dispatcher, for endpoints without a typed service.
    #[must_use]
    pub fn rest(&self) -> &Rest {
        &self.rest
    }

    fn base(&self) -> ServiceBase {
        ServiceBase::new(Arc::clone(&self.rest), self.page_limit)
    }

    /// Projects.
    #[must_use]
    pub fn projects(&self) -> ProjectService {
        ProjectService::new(self.base())
    }

    /// Keys.
    #[must_use]
    pub fn keys(&self) -> KeyService {
        KeyService::new(self.base())
    }

    /// System and project languages.
    #[must_use]
    pub fn languages(&self) -> LanguageService {
        LanguageService::new(self.base())
    }

    /// Translations.
    #[must_use]
    pub fn translations(&self) -> TranslationService {
        TranslationService::new(self.base())
    }

    /// Key comments.
    #[must_use]
    pub fn comments(&self) -> CommentService {
        CommentService::new(self.base())
    }

    /// Project contributors.
    #[must_use]
    pub fn contributors(&self) -> ContributorService {
        ContributorService::new(self.base())
    }

    /// Screenshots.
    #[must_use]
    pub fn screenshots(&self) -> ScreenshotService {
        ScreenshotService::new(self.base())
    }

    /// Project snapshots.
    #[must_use]
    pub fn snapshots(&self) -> SnapshotService {
        SnapshotService::new(self.base())
    }

    /// Tasks.
    #[must_use]
    pub fn tasks(&self) -> TaskService {
        TaskService::new(self.base())
    }

    /// Teams.
    #[must_use]
    pub fn teams(&self) -> TeamService {
        TeamService::new(self.base())
    }

    /// Team users.
    #[must_use]
    pub fn team_users(&self) -> TeamUserService {
        TeamUserService::new(self.base())
    }

    /// Team user groups.
    #[must_use]
    pub fn team_user_groups(&self) -> UserGroupService {
        UserGroupService::new(self.base())
    }

    /// Translation orders.
    #[must_use]
    pub fn orders(&self) -> OrderService {
        OrderService::new(self.base())
    }

    /// Payment cards.
    #[must_use]
    pub fn payment_cards(&self) -> PaymentCardService {
        PaymentCardService::new(self.base())
    }

    /// Translation providers.
    #[must_use]
    pub fn translation_providers(&self) -> TranslationProviderService {
        TranslationProviderService::new(self.base())
    }

    /// Custom translation statuses.
    #[must_use]
    pub fn translation_statuses(&self) -> TranslationStatusService {
        TranslationStatusService::new(self.base())
    }

    /// Webhooks.
    #[must_use]
    pub fn webhooks(&self) -> WebhookService {
        WebhookService::new(self.base())
    }

    /// Files.
    #[must_use]
    pub fn files(&self) -> FileService {
        FileService::new(self.base())
    }

    /// Branches.
    #[must_use]
    pub fn branches(&self) -> BranchService {
        BranchService::new(self.base())
    }

    /// Queued processes.
    #[must_use]
    pub fn queued_processes(&self) -> QueuedProcessService {
        QueuedProcessService::new(self.base())
    }

    /// Translation segments.
    #[must_use]
    pub fn segments(&self) -> SegmentService {
        SegmentService::new(self.base())
    }
}

/// Builder for [`Api`].
pub struct ApiBuilder {
    token: String,
    config: ClientConfigBuilder,
    steps: Vec<TransportStep>,
}

impl std::fmt::Debug for ApiBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiBuilder")
            .field("config", &self.config)
            .field("transport_steps", &self.steps.len())
            .finish_non_exhaustive()
    }
}

impl ApiBuilder {
    /// Override the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.base_url(base_url);
        self
    }

    /// Retries after the first attempt; must not be negative.
    #[must_use]
    pub fn retry_count(mut self, count: i64) -> Self {
        self.config = self.config.retry_count(count);
        self
    }

    /// Wait between attempts.
    #[must_use]
    pub fn retry_wait(mut self, wait: Duration) -> Self {
        self.config = self.config.retry_wait(wait);
        self
    }

    /// Upper bound for a server requested wait.
    #[must_use]
    pub fn max_retry_wait(mut self, wait: Duration) -> Self {
        self.config = self.config.max_retry_wait(wait);
        self
    }

    /// Per-attempt request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.connect_timeout(timeout);
        self
    }

    /// Verbose request logging.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.config = self.config.debug(debug);
        self
    }

    /// Default page size of list calls.
    #[must_use]
    pub fn page_limit(mut self, limit: u32) -> Self {
        self.config = self.config.page_limit(limit);
        self
    }

    /// Replace the default retry condition.
    #[must_use]
    pub fn retry_condition(mut self, condition: RetryCondition) -> Self {
        self.steps
            .push(Box::new(move |builder| builder.retry_condition(condition)));
        self
    }

    /// Add a Tower layer around the whole transport stack.
    ///
    /// Layers are applied in order: first added = outermost.
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: tower::Service<Request<Bytes>, Response = Response<Bytes>, Error = Error>
            + Clone
            + Send
            + 'static,
        <L::Service as tower::Service<Request<Bytes>>>::Future: Send,
    {
        self.steps.push(Box::new(move |builder| builder.layer(layer)));
        self
    }

    /// Validate the configuration and build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a negative retry count, a zero page
    /// limit, a zero timeout or an unusable base URL.
    pub fn build(self) -> Result<Api> {
        let config = self.config.build()?;
        let builder = self
            .steps
            .into_iter()
            .fold(HttpTransport::builder(self.token, config), |builder, step| step(builder));
        Ok(Api::from_transport(builder.build()))
    }
}
