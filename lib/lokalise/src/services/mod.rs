//! Resource services, one module per API resource.
//!
//! Wire model fields keep the names of the API reference and are left
//! undocumented.

#![allow(missing_docs)]

mod branches;
mod comments;
mod contributors;
mod files;
mod keys;
mod languages;
mod orders;
mod payment_cards;
mod projects;
mod queued_processes;
mod screenshots;
mod segments;
mod snapshots;
mod tasks;
mod team_user_groups;
mod team_users;
mod teams;
mod translation_providers;
mod translation_statuses;
mod translations;
mod webhooks;

pub use branches::{
    Branch, BranchDeleted, BranchMerged, BranchResponse, BranchService, BranchesResponse,
    MergeBranch,
};
pub use comments::{
    Comment, CommentDeleted, CommentResponse, CommentService, CommentsResponse, NewComment,
};
pub use contributors::{
    Contributor, ContributorDeleted, ContributorLanguage, ContributorLanguageAccess,
    ContributorResponse, ContributorService, ContributorsResponse, NewContributor,
    UpdateContributor,
};
pub use files::{
    File, FileDeleted, FileDownload, FileDownloadResponse, FileListOptions, FileService, FileUpload,
    FileUploadResponse, FilesResponse,
};
pub use keys::{
    BulkUpdateKey, Key, KeyDeleted, KeyListOptions, KeyResponse, KeyRetrieveOptions, KeyService,
    KeysDeleted, KeysResponse, NewKey, NewKeyTranslation, UpdateKey,
};
pub use languages::{
    Language, LanguageDeleted, LanguageResponse, LanguageService, LanguagesResponse, NewLanguage,
    UpdateLanguage,
};
pub use orders::{NewOrder, Order, OrderService, OrdersResponse};
pub use payment_cards::{
    NewPaymentCard, PaymentCard, PaymentCardDeleted, PaymentCardService, PaymentCardsResponse,
};
pub use projects::{
    NewProject, Project, ProjectDeleted, ProjectLanguage, ProjectListOptions, ProjectService,
    ProjectSettings, ProjectStatistics, ProjectTruncated, ProjectsResponse, QaIssues, UpdateProject,
};
pub use queued_processes::{
    QueuedProcess, QueuedProcessResponse, QueuedProcessService, QueuedProcessesResponse,
};
pub use screenshots::{
    Coordinates, NewScreenshot, Screenshot, ScreenshotDeleted, ScreenshotKey, ScreenshotListOptions,
    ScreenshotResponse, ScreenshotService, ScreenshotsResponse, UpdateScreenshot,
};
pub use segments::{
    Segment, SegmentListOptions, SegmentResponse, SegmentService, SegmentsResponse, UpdateSegment,
};
pub use snapshots::{
    Snapshot, SnapshotDeleted, SnapshotListOptions, SnapshotResponse, SnapshotService,
    SnapshotsResponse,
};
pub use tasks::{
    NewTask, Task, TaskDeleted, TaskGroup, TaskLanguage, TaskLanguageAssignment, TaskListOptions,
    TaskResponse, TaskService, TaskUser, TasksResponse, UpdateTask,
};
pub use team_user_groups::{
    GroupLanguages, GroupPermissions, NewUserGroup, UserGroup, UserGroupDeleted, UserGroupResponse,
    UserGroupService, UserGroupsResponse,
};
pub use team_users::{
    TeamUser, TeamUserDeleted, TeamUserResponse, TeamUserRole, TeamUserService, TeamUsersResponse,
};
pub use teams::{Quota, Team, TeamService, TeamsResponse};
pub use translation_providers::{
    ProviderPair, ProviderTier, TranslationProvider, TranslationProviderService,
    TranslationProvidersResponse,
};
pub use translation_statuses::{
    NewTranslationStatus, StatusColors, TranslationStatus, TranslationStatusDeleted,
    TranslationStatusResponse, TranslationStatusService, TranslationStatusesResponse,
    UpdateTranslationStatus,
};
pub use translations::{
    Translation, TranslationListOptions, TranslationResponse, TranslationRetrieveOptions,
    TranslationService, TranslationStatusRef, TranslationsResponse, UpdateTranslation,
};
pub use webhooks::{
    EventLanguages, NewWebhook, UpdateWebhook, Webhook, WebhookDeleted, WebhookResponse,
    WebhookSecret, WebhookService, WebhooksResponse,
};

