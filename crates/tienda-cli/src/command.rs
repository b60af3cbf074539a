use clap::Parser;
use tienda_artifacts::{HttpSource, LoadState, load};
use tienda_i18n::{Language, resolve};

use crate::app::App;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Base URL the five analysis artifacts are served from
    #[arg(long, default_value = "http://127.0.0.1:8000/data")]
    base_url: String,

    /// Interface language (en or es); toggleable at runtime with `l`
    #[arg(long, default_value = "en")]
    language: Language,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    eprintln!("{}", resolve(args.language, "loading_dashboard"));
    let runtime = tokio::runtime::Runtime::new()?;
    let source = HttpSource::new(reqwest::Client::new(), args.base_url);
    let mut state = LoadState::Loading;
    state.settle(runtime.block_on(load(&source)));

    let mut terminal = ratatui::init();
    let app_result = App::new(state, args.language).run(&mut terminal);
    ratatui::restore();
    app_result
}
