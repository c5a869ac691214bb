use std::borrow::Borrow;
use std::net::{Ipv4Addr, ToSocketAddrs};
use citylook::config::{self, Config};
use citylook::db::Db;
use crate::configrefs;

/// Per-worker application state.
///
/// Readiness progresses uninitialized -> engine-ready -> dataset-ready
/// while the state is constructed; afterwards the engine handle is only
/// read.  A failed dataset import leaves the handle engine-ready so the
/// status endpoint can report "not loaded".
pub struct State {
    pub cfg: Box<dyn Config>,
    pub db: Box<dyn Db>,
}

impl State {
    pub fn new(cfg: Box<dyn Config>) -> Result<State, String> {
        let mut db = citylook::db::open(cfg.borrow() as &dyn Config)?;
        let source =
            citylook::db::dataset_source(cfg.borrow() as &dyn Config)?;
        if let Err(e) = db.load_dataset(&source) {
            log::error!("dataset load failed ({source}): {e}");
        }
        Ok(State {
            cfg,
            db: Box::new(db),
        })
    }
}

pub fn addr<C>(cfg: &C) -> Result<impl ToSocketAddrs, String>
where
    C: Config + ?Sized,
{
    let all_interfaces =
        config::get_ref(cfg, &configrefs::SERVER_ALL_INTERFACES)?;
    let addr = if all_interfaces { Ipv4Addr::UNSPECIFIED }
               else { Ipv4Addr::LOCALHOST };
    Ok((addr, config::get_ref(cfg, &configrefs::SERVER_PORT)?))
}
