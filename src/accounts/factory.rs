use std::sync::Arc;
use crate::accounts::domain::AccountService;
use crate::accounts::domain::service::AccountServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::users::factory::create_user_repository;

pub(crate) fn create_account_service(config: &Configuration, publisher: Arc<dyn EventPublisher>) -> Arc<dyn AccountService> {
    let user_repo = create_user_repository(config.store);
    Arc::new(AccountServiceImpl::new(config, user_repo, publisher))
}
