use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Remembers which phone numbers applied recently so the same applicant is
/// not forwarded twice within the window.
pub struct RecentApplications {
    seen: DashMap<String, DateTime<Utc>>,
    window: Duration,
}

/// Digits only, so `090-1234-5678`, `09012345678` and the full-width
/// `０９０-１２３４-５６７８` collide. Empty when `phone` holds no digits.
pub fn phone_key(phone: &str) -> String {
    phone
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32),
            _ => None,
        })
        .collect()
}

impl RecentApplications {
    pub fn new(window: Duration) -> Self {
        Self {
            seen: DashMap::new(),
            window,
        }
    }

    fn within_window(&self, then: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match (now - then).to_std() {
            Ok(elapsed) => elapsed < self.window,
            // Clock went backwards; treat as recent.
            Err(_) => true,
        }
    }

    /// Records `phone` at `now`. Returns false when it already applied
    /// within the window.
    pub fn claim(&self, phone: &str, now: DateTime<Utc>) -> bool {
        match self.seen.entry(phone_key(phone)) {
            Entry::Occupied(mut entry) => {
                if self.within_window(*entry.get(), now) {
                    false
                } else {
                    entry.insert(now);
                    true
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
                true
            }
        }
    }

    /// Forgets a claim whose application never got delivered.
    pub fn release(&self, phone: &str) {
        self.seen.remove(&phone_key(phone));
    }

    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.seen.len();
        self.seen.retain(|_, then| self.within_window(*then, now));
        before - self.seen.len()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as TimeDelta;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn second_claim_inside_window_is_refused() {
        let recent = RecentApplications::new(Duration::from_secs(60));
        assert!(recent.claim("090-1234-5678", at(0)));
        assert!(!recent.claim("09012345678", at(30)));
    }

    #[test]
    fn claim_succeeds_again_after_window() {
        let recent = RecentApplications::new(Duration::from_secs(60));
        assert!(recent.claim("090-1234-5678", at(0)));
        assert!(recent.claim("090-1234-5678", at(0) + TimeDelta::seconds(61)));
    }

    #[test]
    fn released_claims_can_be_retried() {
        let recent = RecentApplications::new(Duration::from_secs(60));
        assert!(recent.claim("090-1234-5678", at(0)));
        recent.release("090 1234 5678");
        assert!(recent.claim("090-1234-5678", at(1)));
    }

    #[test]
    fn full_width_digits_map_to_ascii() {
        assert_eq!(phone_key("０９０-１１１１-２２２２"), "09011112222");
        assert_eq!(phone_key("090-1111-2222"), "09011112222");
        assert_eq!(phone_key("電話なし"), "");
    }

    #[test]
    fn different_full_width_numbers_do_not_collide() {
        let recent = RecentApplications::new(Duration::from_secs(60));
        assert!(recent.claim("０９０-１１１１-２２２２", at(0)));
        assert!(recent.claim("０８０-３３３３-４４４４", at(1)));
        assert!(!recent.claim("09011112222", at(2)));
    }

    #[test]
    fn purge_drops_only_expired_entries() {
        let recent = RecentApplications::new(Duration::from_secs(60));
        recent.claim("111", at(0));
        recent.claim("222", at(50));
        assert_eq!(recent.purge_expired(at(100)), 1);
        assert_eq!(recent.len(), 1);
    }
}
