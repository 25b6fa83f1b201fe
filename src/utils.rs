// Playlist helpers shared by the player and the queue views.

use rand::seq::SliceRandom;

use crate::api::models::Track;

/// Return a shuffled copy of the list; the input order is untouched.
pub fn shuffled(list: &[Track]) -> Vec<Track> {
    let mut out = list.to_vec();
    let mut rng = rand::thread_rng();
    out.shuffle(&mut rng);
    out
}

/// Locate a track in a list by identity.
pub fn find_index(song: &Track, list: &[Track]) -> Option<usize> {
    list.iter().position(|item| item.id == song.id)
}
