use std::{
    fs::File,
    io::{self, Write},
    sync::Arc,
    thread,
    time::Duration,
};

use clap::Parser;
use line_clamp::{
    event_bus::EventBus,
    helpers,
    models::{
        args::Args,
        clamp_report::ClampReport,
        config::Config,
        sample_posts::{SAMPLE_COLUMNS, SAMPLE_TITLES},
        viewport::Viewport,
    },
    services::{
        clamp_service::ClampService,
        display::{write_report, Display},
        resize_monitor::{current_viewport, ResizeMonitor},
        runnable::Runnable,
    },
    CellSurface, ClampBinding, ClampConfig, LineClamp,
};
use simplelog::{CombinedLogger, Config as LogConfig, WriteLogger};

fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    let app_cache = helpers::dir::get_and_create_dir(dirs::cache_dir)?;
    let log_path = app_cache.join("app.log");

    CombinedLogger::init(vec![WriteLogger::new(
        log::LevelFilter::Debug,
        LogConfig::default(),
        File::create(log_path)?,
    )])?;
    Ok(())
}

fn clamp_once(
    columns: u16,
    config: ClampConfig,
    engine: LineClamp,
) -> Result<ClampReport, Box<dyn std::error::Error>> {
    let mut binding = ClampBinding::new(CellSurface::new(columns), config, engine);
    let outcome = binding.mount()?;
    Ok(ClampReport::new(
        columns,
        &outcome,
        binding.element().rendered_lines(),
    ))
}

fn run_demo(args: &Args, config: &Config, engine: LineClamp) -> Result<(), Box<dyn std::error::Error>> {
    let columns = args.width.unwrap_or(SAMPLE_COLUMNS);
    let mut stdout = io::stdout().lock();

    for title in SAMPLE_TITLES {
        let clamp_config = ClampConfig::new(config.allowed_lines)?.with_source_text(title);
        let report = clamp_once(columns, clamp_config, engine)?;
        write_report(&mut stdout, &report)?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = init_logger() {
        eprintln!("failed to set up logging: {err}");
    }

    let args = Args::parse();
    let mut config = Config::load().unwrap_or_else(|err| {
        log::warn!("failed to load config, using defaults: {err}");
        Config::default()
    });
    config.apply_args(&args);
    log::debug!("running with {config:?}");

    let engine = LineClamp::new().with_safety_margin(config.safety_margin);

    if args.demo {
        return run_demo(&args, &config, engine);
    }

    let text = match &args.text {
        Some(text) => text.clone(),
        None => io::read_to_string(io::stdin())?
            .trim_end_matches('\n')
            .to_owned(),
    };
    let clamp_config = ClampConfig::new(config.allowed_lines)?.with_source_text(text);

    let viewport = match args.width {
        Some(columns) => Viewport::new(columns, 0),
        None => current_viewport().unwrap_or(Viewport::new(80, 24)),
    };

    if !args.watch {
        let report = clamp_once(viewport.columns, clamp_config, engine)?;
        let mut stdout = io::stdout().lock();
        write_report(&mut stdout, &report)?;
        return Ok(());
    }

    let (event_bus, event_bus_handle) = EventBus::new();
    thread::spawn(move || {
        event_bus.run();
    });

    let clamp_service = Arc::new(
        ClampService::new(event_bus_handle.clone(), clamp_config, engine, viewport)
            .with_settle_delay(Duration::from_millis(config.settle_delay_ms))
            .with_resize_debounce(Duration::from_millis(config.resize_debounce_ms)),
    );

    let mut services: Vec<Arc<dyn Runnable>> =
        vec![Arc::new(Display::new(event_bus_handle.clone()))];
    // a fixed width does not follow the terminal
    if args.width.is_none() {
        services.push(Arc::new(ResizeMonitor::new(
            event_bus_handle.clone(),
            Duration::from_millis(config.poll_interval_ms),
        )));
    }

    for service in services {
        service.run();
    }

    if clamp_service.run().join().is_err() {
        log::error!("clamp service thread panicked");
    }
    Ok(())
}
