//! Small demo binary exercising the library end to end. Run with
//! `RUST_LOG=debug cargo run --bin inspect` to see the retirement/
//! reconstruction decisions logged as they happen.

use ropestr::{Cord, Encoding};

fn main() {
    env_logger::init();

    let greeting = Cord::from_copy(b"  hello, rope world  ", Encoding::Ascii);
    println!("greeting: {:?} (len {})", greeting, greeting.length());

    let trimmed = greeting.trim();
    println!("trimmed:  {:?}", trimmed);

    let shout = &trimmed + &Cord::from_copy(b"!", Encoding::Ascii);
    println!("shout:    {:?}", shout);

    let echoed = &shout * 3;
    println!("echoed:   {:?}", echoed);

    // Dropping `greeting` here lowers its wrapper count to zero while
    // `trimmed` (and everything built from it) still holds a strong
    // reference into its bytes. Whether that forces `trimmed` to
    // materialize depends on the cost comparison logged above at
    // `debug` level.
    drop(greeting);

    match shout.substring(0, 5) {
        Ok(piece) => println!("piece:    {:?}", piece),
        Err(e) => println!("substring failed: {:?}", e),
    }

    let mut out = std::io::stdout();
    print!("printed:  ");
    echoed.print(&mut out).expect("write to stdout");
    println!();
}
