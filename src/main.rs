use plum_checkers::terminal::terminal_top::run_stdio_loop;

fn main() -> std::io::Result<()> {
    run_stdio_loop()
}
