use std::sync::{Arc, Mutex};

use save_as_image::{
    ConsolePrompt, Dataset, DisplayPort, Image, LogDisplay, LogEventPublisher, PixelType,
    PpmEncoder, SaveCoordinator, SaveOutcome, SaveRequest, StdFileSystem,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn gradient() -> Result<Image, Box<dyn std::error::Error>> {
    let mut data = Vec::with_capacity((WIDTH * HEIGHT * 3) as usize);

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            data.push((x * 255 / (WIDTH - 1)) as u8);
            data.push((y * 255 / (HEIGHT - 1)) as u8);
            data.push(128);
        }
    }

    Ok(Image::from_data(WIDTH, HEIGHT, PixelType::Rgb8, data)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let target = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "output/gradient.ppm".to_owned());

    if let Some(parent) = std::path::Path::new(&target).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let dataset = Dataset::new("untitled", gradient()?).into_handle();
    let display: Arc<Mutex<dyn DisplayPort>> = Arc::new(Mutex::new(LogDisplay::new("untitled")));

    let coordinator = SaveCoordinator::new(
        Arc::new(PpmEncoder::new()),
        Arc::new(ConsolePrompt::stdio()),
        Arc::new(LogEventPublisher),
        Arc::new(StdFileSystem),
    );

    let request = SaveRequest::new(target, dataset, Arc::downgrade(&display));

    match coordinator.run(&request)? {
        SaveOutcome::Saved { path } => println!("Saved {}", path.display()),
        SaveOutcome::Declined => println!("Left existing file in place"),
    }

    Ok(())
}
