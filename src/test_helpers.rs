//! Shared fakes for unit tests: a scripted backend and deterministic timers.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{ApiError, AuthApi};
use crate::cache::MemoryStorage;
use crate::config::ClientConfig;
use crate::profile::{ProfileFailurePolicy, ProfileOracle};
use crate::session::{SessionFailurePolicy, SessionResolver};
use crate::timer::Timer;
use crate::types::{
    AuthStatus, LoginRequest, ProfileProbe, ProfileUpdate, RegisterRequest, RegisterResponse, User, UserType,
};

pub(crate) fn job_seeker(id: i64) -> User {
    User {
        id,
        email: format!("seeker{id}@example.com"),
        full_name: "Sam Seeker".to_owned(),
        user_type: UserType::JobSeeker,
    }
}

pub(crate) fn employer(id: i64) -> User {
    User {
        id,
        email: format!("hiring{id}@example.com"),
        full_name: "Erin Employer".to_owned(),
        user_type: UserType::Employer,
    }
}

pub(crate) fn signed_in(user: User) -> AuthStatus {
    AuthStatus { is_authenticated: true, user: Some(user) }
}

pub(crate) fn signed_out() -> AuthStatus {
    AuthStatus { is_authenticated: false, user: None }
}

pub(crate) fn status(code: u16, message: &str) -> ApiError {
    ApiError::Status { status: code, message: Some(message.to_owned()) }
}

/// Scripted answer for one endpoint.
#[derive(Clone, Debug)]
pub(crate) enum Reply<T> {
    Ready(Result<T, ApiError>),
    /// Never completes; only a timeout or cancellation ends the call.
    Stall,
}

impl<T: Clone> Reply<T> {
    async fn play(self) -> Result<T, ApiError> {
        match self {
            Self::Ready(result) => result,
            Self::Stall => futures::future::pending().await,
        }
    }
}

fn unscripted<T>() -> Reply<T> {
    Reply::Ready(Err(ApiError::Unavailable))
}

/// Number of calls each endpoint received.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Calls {
    pub status: usize,
    pub login: usize,
    pub logout: usize,
    pub register: usize,
    pub profile: usize,
    pub save_profile: usize,
}

struct Script {
    status: Reply<AuthStatus>,
    login: Reply<User>,
    logout: Reply<()>,
    register: Reply<RegisterResponse>,
    profile: Reply<ProfileProbe>,
    save_profile: Reply<()>,
    calls: Calls,
    last_login: Option<LoginRequest>,
    last_profile: Option<ProfileUpdate>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            status: unscripted(),
            login: unscripted(),
            logout: Reply::Ready(Ok(())),
            register: unscripted(),
            profile: unscripted(),
            save_profile: unscripted(),
            calls: Calls::default(),
            last_login: None,
            last_profile: None,
        }
    }
}

/// In-memory [`AuthApi`]; clones share the script and the call counters.
#[derive(Clone, Default)]
pub(crate) struct MockApi {
    script: Rc<RefCell<Script>>,
}

impl MockApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_status(self, reply: Reply<AuthStatus>) -> Self {
        self.script.borrow_mut().status = reply;
        self
    }

    pub(crate) fn with_login(self, reply: Reply<User>) -> Self {
        self.script.borrow_mut().login = reply;
        self
    }

    pub(crate) fn with_logout(self, reply: Reply<()>) -> Self {
        self.script.borrow_mut().logout = reply;
        self
    }

    pub(crate) fn with_register(self, reply: Reply<RegisterResponse>) -> Self {
        self.script.borrow_mut().register = reply;
        self
    }

    pub(crate) fn with_profile(self, reply: Reply<ProfileProbe>) -> Self {
        self.script.borrow_mut().profile = reply;
        self
    }

    pub(crate) fn with_save_profile(self, reply: Reply<()>) -> Self {
        self.script.borrow_mut().save_profile = reply;
        self
    }

    pub(crate) fn calls(&self) -> Calls {
        self.script.borrow().calls
    }

    pub(crate) fn last_login(&self) -> Option<LoginRequest> {
        self.script.borrow().last_login.clone()
    }

    pub(crate) fn last_profile(&self) -> Option<ProfileUpdate> {
        self.script.borrow().last_profile.clone()
    }
}

#[async_trait(?Send)]
impl AuthApi for MockApi {
    async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        let reply = {
            let mut script = self.script.borrow_mut();
            script.calls.status += 1;
            script.status.clone()
        };
        reply.play().await
    }

    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let reply = {
            let mut script = self.script.borrow_mut();
            script.calls.login += 1;
            script.last_login = Some(request.clone());
            script.login.clone()
        };
        reply.play().await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let reply = {
            let mut script = self.script.borrow_mut();
            script.calls.logout += 1;
            script.logout.clone()
        };
        reply.play().await
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let reply = {
            let mut script = self.script.borrow_mut();
            script.calls.register += 1;
            script.register.clone()
        };
        reply.play().await
    }

    async fn profile(&self) -> Result<ProfileProbe, ApiError> {
        let reply = {
            let mut script = self.script.borrow_mut();
            script.calls.profile += 1;
            script.profile.clone()
        };
        reply.play().await
    }

    async fn save_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let reply = {
            let mut script = self.script.borrow_mut();
            script.calls.save_profile += 1;
            script.last_profile = Some(update.clone());
            script.save_profile.clone()
        };
        reply.play().await
    }
}

/// Timer that never fires: requests always win the race.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct NeverTimer;

#[async_trait(?Send)]
impl Timer for NeverTimer {
    async fn sleep(&self, _duration: Duration) {
        futures::future::pending::<()>().await;
    }
}

/// Timer that fires at once: a stalled request times out immediately.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct InstantTimer;

#[async_trait(?Send)]
impl Timer for InstantTimer {
    async fn sleep(&self, _duration: Duration) {}
}

pub(crate) fn config(session_policy: SessionFailurePolicy, profile_policy: ProfileFailurePolicy) -> ClientConfig {
    ClientConfig { session_policy, profile_policy, ..ClientConfig::default() }
}

pub(crate) fn resolver<T: Timer>(
    api: &MockApi,
    storage: &MemoryStorage,
    timer: T,
    policy: SessionFailurePolicy,
) -> SessionResolver<MockApi, MemoryStorage, T> {
    SessionResolver::new(api.clone(), storage.clone(), timer, &config(policy, ProfileFailurePolicy::default()))
}

pub(crate) fn oracle<T: Timer>(api: &MockApi, timer: T) -> ProfileOracle<MockApi, T> {
    ProfileOracle::new(api.clone(), timer, &ClientConfig::default())
}
