mod dns;
mod use_cases;

pub use dns::DnsServices;
pub use use_cases::UseCases;

use orbital_dns_api::AppState;
use orbital_dns_domain::Config;
use orbital_dns_infrastructure::dns::DnsRequestHandler;

/// Everything the two listeners need, wired from one configuration.
pub struct Services {
    pub dns_handler: DnsRequestHandler,
    pub app_state: AppState,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let dns = DnsServices::new(config)?;
        let use_cases = UseCases::new(config, &dns)?;

        Ok(Self {
            dns_handler: DnsRequestHandler::new(use_cases.resolve_query.clone()),
            app_state: AppState {
                resolve_query: use_cases.resolve_query,
                add_zone_record: use_cases.add_zone_record,
            },
        })
    }
}
