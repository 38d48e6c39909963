use super::prompt::read_new_quote;
use super::render::{
    colors_supported, print_messages, print_quotes, terminal_width, RenderOptions,
};
use super::setup::Cli;
use clap::Parser;
use quotez::api::QuotezApi;
use quotez::config::DisplayStyle;
use quotez::error::{QuotezError, Result};
use quotez::filter::Query;
use quotez::init::initialize;
use quotez::store::fs::JsonFileStore;
use rand::rngs::StdRng;

struct AppContext {
    api: QuotezApi<JsonFileStore, StdRng>,
    render: RenderOptions,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli);

    if cli.add {
        return handle_add(&mut ctx);
    }
    let mode = cli.match_mode.into();
    if let Some(tag) = cli.tag {
        return handle_search(&mut ctx, Query::tag(tag, mode), cli.one);
    }
    if let Some(author) = cli.author {
        return handle_search(&mut ctx, Query::author(author, mode), cli.one);
    }
    handle_random(&mut ctx)
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn init_context(cli: &Cli) -> AppContext {
    let ctx = initialize(cli.file.as_deref(), cli.seed);

    let style: DisplayStyle = cli.style.map(Into::into).unwrap_or(ctx.config.style);
    let width = cli
        .width
        .unwrap_or_else(|| terminal_width(ctx.config.fallback_width));
    log::debug!("rendering {:?} at {} columns", style, width);

    AppContext {
        api: ctx.api,
        render: RenderOptions {
            style,
            width,
            max_box_width: ctx.config.max_box_width,
            use_color: !cli.no_color && colors_supported(),
        },
    }
}

fn handle_random(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.random_quote()?;
    print_quotes(&result.listed_quotes, &ctx.render);
    print_messages(&result.messages, ctx.render.use_color);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: Query, one: bool) -> Result<()> {
    let result = ctx.api.search_quotes(&query, one)?;
    print_quotes(&result.listed_quotes, &ctx.render);
    print_messages(&result.messages, ctx.render.use_color);
    Ok(())
}

fn handle_add(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let quote = read_new_quote(&mut stdin.lock(), &mut stdout)
        .map_err(|source| QuotezError::Input { source })?;
    println!();

    let Some(quote) = quote else {
        println!("No new quote added");
        return Ok(());
    };

    let result = ctx.api.add_quote(quote)?;
    print_quotes(&result.affected_quotes, &ctx.render);
    print_messages(&result.messages, ctx.render.use_color);
    Ok(())
}
