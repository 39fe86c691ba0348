// Window and input handling follow the pixels conway example
//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

use std::io::{self, BufRead, Write};

mod auxiliary;
mod projects;
mod traits_and_structs;

use auxiliary::{LifeError, LifeResult};
use projects::cadence::CadenceConfig;
use projects::life::BOARD;
use projects::life_engine::Bounds;

fn prompt(text: &str) -> LifeResult<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim();
    if line == "q" || line == "quit" {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}

fn select_config() -> LifeResult<Option<CadenceConfig>> {
    loop {
        let Some(text) = prompt("\nSeconds per generation during autoplay (blank for default): ")?
        else {
            return Ok(None);
        };
        match CadenceConfig::from_seconds(&text) {
            Ok(config) => return Ok(Some(config)),
            Err(e @ LifeError::InvalidInterval(_)) => println!("\nERROR: {}", e),
            Err(e) => return Err(e),
        }
    }
}

fn select_bounds() -> LifeResult<Option<Bounds>> {
    loop {
        let Some(text) = prompt("Keep life inside the visible board? [Y/n]: ")? else {
            return Ok(None);
        };
        match text.to_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(Some(BOARD)),
            "n" | "no" => return Ok(Some(Bounds::Unbounded)),
            _ => println!("\nERROR: answer y or n."),
        }
    }
}

fn main() -> LifeResult<()> {
    println!("\nConway's Game of Life\nType 'q' to quit.");
    println!("\nRules:\n1) A live cell with fewer than two live neighbours dies.\n2) A live cell with two or three live neighbours lives on.\n3) A live cell with more than three live neighbours dies.\n4) A dead cell with exactly three live neighbours becomes alive.");

    let Some(config) = select_config()? else {
        return Ok(());
    };
    let Some(bounds) = select_bounds()? else {
        return Ok(());
    };

    println!("\n\nControls:\nMOUSE: paint cells\nA: autoplay\nC: clear board\nR or SPACE: skip one round\nESC: close window");
    projects::life::run_life(config, bounds)
}
