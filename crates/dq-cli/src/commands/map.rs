use dq_core::{MapStyle, render_json, render_tree};

pub fn run_tree() -> Result<(), String> {
    let mansion = super::build_mansion()?;
    print!("{}", render_tree(Some(mansion.root()), &MapStyle::default()));
    Ok(())
}

pub fn run_json() -> Result<(), String> {
    let mansion = super::build_mansion()?;
    let json = render_json(&mansion).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
