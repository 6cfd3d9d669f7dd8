/*
Create date : 2026-10-16
Description : Counts DPLA items matching a search term per decade and draws the
              result as a histogram.

History     : 2026-10-16       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::dpla_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::{
    configs::{search_config::*, total_config::*},
    decade::decade_range::*,
    search::{api_key::*, search_term::*},
};

mod dto;
mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, frequency_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger();

    info!("Decade frequency program start!");

    let search_config: &SearchConfig = get_search_config_info();

    let term: SearchTerm = SearchTerm::new(
        SEARCH_TERM_OVERRIDE
            .clone()
            .unwrap_or_else(|| search_config.term().to_string()),
    )
    .unwrap_or_else(|e| {
        error!("[main] {:?}", e);
        panic!("{:?}", e)
    });

    let range: DecadeRange =
        DecadeRange::new(*search_config.start_year(), *search_config.end_year())
            .unwrap_or_else(|e| {
                error!("[main] {:?}", e);
                panic!("{:?}", e)
            });

    let api_key: ApiKey = ApiKey::new(DPLA_API_KEY.clone());

    /* DPLA connection */
    let dpla_repo: DplaRepositoryImpl = DplaRepositoryImpl::new(get_dpla_config_info())
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing dpla_repo.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let frequency_service: FrequencyServiceImpl<DplaRepositoryImpl> =
        FrequencyServiceImpl::new(Arc::new(dpla_repo));
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(get_chart_config_info().clone());
    let output_path: PathBuf = chart_service.default_output_path(&term);

    let main_controller: MainController<
        FrequencyServiceImpl<DplaRepositoryImpl>,
        ChartServiceImpl,
    > = MainController::new(frequency_service, chart_service);

    match main_controller
        .main_task(&term, &api_key, &range, &output_path)
        .await
    {
        Ok((_, chart_path)) => {
            info!("Decade frequency program finished: {:?}", chart_path);
        }
        Err(e) => {
            error!("{:?}", e);
            panic!("{:?}", e)
        }
    }
}
