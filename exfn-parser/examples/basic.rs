use exfn_parser::{Action, parse};

fn main() {
    let argv = &["-f", "--param=one", "--param", "two", "input.txt"];

    let args = match parse(argv).expect("must be parsed") {
        Action::Run(args) => args,
        Action::Help => panic!("help was not requested"),
    };

    if !args.first() || args.second() {
        panic!("invalid switches");
    }

    if args.params() != ["one", "two"] {
        panic!("invalid params");
    }

    if args.positional1() != Some("input.txt") || args.positional2().is_some() {
        panic!("invalid positionals");
    }
}
