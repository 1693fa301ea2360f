use lobby_fnd::{PlayerId, SoundChannel};

#[test]
fn headless_channel_is_silent_under_concurrency() {
    let channel = SoundChannel::headless();
    let players: Vec<PlayerId> = (0..1_000).map(|i| PlayerId::new(format!("p{i}"))).collect();
    let players = &players;

    std::thread::scope(|s| {
        for t in 0..16 {
            s.spawn(move || {
                for i in 0..1_000 {
                    let originator = players.get(i);
                    channel.play_sound_for_all("bombing", originator);
                    channel.play_sound_to_players(
                        "phase_battle",
                        &players[..i],
                        &players[i..],
                        t % 2 == 0,
                    );
                    channel.play_sound_to_players("", &[], &[], false);
                }
            });
        }
    });
}

#[test]
fn channel_is_plain_data() {
    fn assert_send_sync_copy<T: Send + Sync + Copy + 'static>() {}
    assert_send_sync_copy::<SoundChannel>();
}
