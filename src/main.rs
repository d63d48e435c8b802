use aomerge::ui::output;

fn main() {
    if let Err(err) = aomerge::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
