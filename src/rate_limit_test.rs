use super::*;
use std::net::Ipv4Addr;

const LIMIT: usize = 3;
const WINDOW: Duration = Duration::from_secs(60);

fn ip(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
}

#[test]
fn allows_up_to_limit() {
    let rl = RateLimiter::new(LIMIT, WINDOW);
    let now = Instant::now();

    for i in 0..LIMIT {
        assert!(rl.check_and_record_at(ip(1), now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at(ip(1), now),
        Err(RateLimitError::Exceeded { limit: LIMIT, window_secs: 60 })
    ));
}

#[test]
fn clients_are_limited_independently() {
    let rl = RateLimiter::new(LIMIT, WINDOW);
    let now = Instant::now();

    for _ in 0..LIMIT {
        rl.check_and_record_at(ip(1), now).unwrap();
    }
    assert!(rl.check_and_record_at(ip(1), now).is_err());
    assert!(rl.check_and_record_at(ip(2), now).is_ok());
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = RateLimiter::new(LIMIT, WINDOW);
    let start = Instant::now();

    for _ in 0..LIMIT {
        rl.check_and_record_at(ip(1), start).unwrap();
    }
    assert!(rl.check_and_record_at(ip(1), start).is_err());

    let later = start + WINDOW + Duration::from_secs(1);
    assert!(rl.check_and_record_at(ip(1), later).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = RateLimiter::new(1, WINDOW);
    let start = Instant::now();

    rl.check_and_record_at(ip(1), start).unwrap();
    for _ in 0..5 {
        assert!(rl.check_and_record_at(ip(1), start + Duration::from_secs(30)).is_err());
    }
    // Only the first request occupies the window.
    assert!(rl.check_and_record_at(ip(1), start + WINDOW).is_ok());
}

#[test]
fn idle_clients_are_forgotten() {
    let rl = RateLimiter::new(LIMIT, WINDOW);
    let start = Instant::now();

    for last in 1..=10 {
        rl.check_and_record_at(ip(last), start).unwrap();
    }
    assert_eq!(rl.tracked_clients(), 10);

    // Within the window nothing is swept.
    rl.check_and_record_at(ip(200), start + Duration::from_secs(30)).unwrap();
    assert_eq!(rl.tracked_clients(), 11);

    // A window later only the client seen at +30s and the new one remain.
    rl.check_and_record_at(ip(201), start + WINDOW).unwrap();
    assert_eq!(rl.tracked_clients(), 2);
}
