//! Digest-frequency membership index.
//!
//! Four scored sets, one per frequency; a uid lives in at most one of them.
//! The index is re-derived on every save: unconditional removal from all
//! sets, then a conditional re-insert scored by the current time.

use agora_types::meta_adapter::MetaAdapter;

use crate::prelude::*;
use crate::settings::types::DigestFreq;

const DIGEST_FREQUENCIES: [DigestFreq; 4] =
	[DigestFreq::Day, DigestFreq::Week, DigestFreq::Biweek, DigestFreq::Month];

/// Storage key of one digest membership set.
pub fn digest_set_key(freq: DigestFreq) -> String {
	format!("digest:{}:uids", freq.as_str())
}

/// Re-derive the digest membership of `uid` from `freq`.
pub async fn update_digest_setting(
	meta: &dyn MetaAdapter,
	uid: Uid,
	freq: DigestFreq,
) -> AgResult<()> {
	let keys: Vec<String> = DIGEST_FREQUENCIES.iter().map(|f| digest_set_key(*f)).collect();
	meta.remove_sorted_set_member(&keys, uid).await?;
	if freq != DigestFreq::Off {
		meta.add_sorted_set_member(&digest_set_key(freq), uid, now()).await?;
	}
	debug!("Digest frequency for uid={} set to {}", uid, freq);
	Ok(())
}

/// Users subscribed at `freq`, least recently updated first.
pub async fn list_subscribers(meta: &dyn MetaAdapter, freq: DigestFreq) -> AgResult<Vec<Uid>> {
	if freq == DigestFreq::Off {
		return Ok(Vec::new());
	}
	meta.list_sorted_set_members(&digest_set_key(freq)).await
}


// vim: ts=4
