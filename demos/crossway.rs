extern crate crossway;

use crossway::{Crossway, GridIndex};

fn main() {
    env_logger::init();

    let mut game = Crossway::default();
    println!(
        "{0}x{0} board, {1:?} to move",
        game.size(),
        game.current_player()
    );

    // white chains across row 3 towards the far column and wins; black
    // answers along row 5 and never gets the eighth piece
    for col in 0..game.size() {
        let state = game.update(GridIndex::new(3, col)).unwrap();
        println!("{}", game.board());
        if game.is_finished() {
            println!("{:?}", state);
            break;
        }
        game.update(GridIndex::new(5, col)).unwrap();
        println!("{}", game.board());
    }

    // the engine refuses placements now; restarting is the frontend's call
    println!("{}", game.update(GridIndex::new(0, 0)).unwrap_err());
    game.reset();
    println!("restarted, {:?} to move", game.current_player());
}
