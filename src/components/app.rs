use super::{
    configuration::Config,
    mailer::MailerComponent,
    store::StoreComponent,
};

pub struct AppComponents {
    pub config: Config,
    pub store: StoreComponent,
    pub mailer: MailerComponent,
}

impl AppComponents {
    pub fn new(custom_config: Option<Config>) -> Self {
        let config = custom_config
            .unwrap_or_else(|| Config::new().expect("Couldn't read the configuration"));

        let store = StoreComponent::new(config.store.url.clone(), config.store.key.clone());
        let mailer = MailerComponent::new(
            config.mailer.url.clone(),
            config.mailer.key.clone(),
            config.mailer.sender.clone(),
        );

        Self {
            config,
            store,
            mailer,
        }
    }
}
