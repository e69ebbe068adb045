use crate::core::error::Result;
use crate::core::objects::ObjectStore;
use crate::tui::browser::Browser;
use crate::tui::pager::Pager;
use crate::tui::screen::Screen;

/// Alternate between browsing and paging until the user quits.
///
/// Returns how many leaves were handed to the pager. A failing pager is reported on
/// the next list instead of ending the session.
pub fn run_session<S, U, P>(browser: &mut Browser<S>, screen: &mut U, pager: &P) -> Result<usize>
where
    S: ObjectStore,
    U: Screen,
    P: Pager,
{
    let mut opened = 0;
    while let Some(leaf) = browser.next_leaf(screen)? {
        opened += 1;
        if let Err(e) = screen.suspend(|| pager.show(&leaf)) {
            log::warn!("pager failed for {}: {e}", leaf.name);
            browser.notify(format!("Pager failed: {e}"));
        }
    }
    Ok(opened)
}
