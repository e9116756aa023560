//! Read-only views of the day's puzzle and the player's record

use crate::game::SessionManager;
use crate::output::{print_board, print_keyboard, print_outcome, print_stats, share_summary};
use crate::storage::PersistenceGateway;
use crate::wordlists::WordSource;

/// Print the board of the day, plus the outcome once it is over
pub fn run_show<W: WordSource, P: PersistenceGateway>(manager: &SessionManager<W, P>) {
    let high_contrast = manager.config().high_contrast;
    let view = manager.view();

    print_board(&view, high_contrast);
    if view.status.is_terminal() {
        print_outcome(&view, high_contrast);
    } else {
        print_keyboard(&view, high_contrast);
        println!("\n{}\n", share_summary(&view, high_contrast));
    }
}

/// Print cumulative statistics
pub fn run_stats<W: WordSource, P: PersistenceGateway>(manager: &SessionManager<W, P>) {
    print_stats(manager.stats(), manager.session().attempt_limit());
}
