//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for every grid operation, whatever UI drives it.
//!
//! It dispatches to `commands/*.rs`, normalizes user-supplied cell references
//! (`17`, `1.8`, `3-5`) into checked global indexes, and owns the three pieces
//! of state a session needs: the key-value store, the [`GridStore`] and the
//! drag/edit [`Session`].
//!
//! It does no terminal I/O and holds no presentation logic.
//!
//! `MandalaApi<S: DataStore>` is generic over the storage backend:
//! `MandalaApi<FileStore>` in production, `MandalaApi<InMemoryStore>` in tests.

use crate::commands;
use crate::defaults::Palette;
use crate::error::Result;
use crate::grid_store::GridStore;
use crate::index::{cell_views, parse_cell_or_range, CellRef, CellView};
use crate::model::{Grid, Variant};
use crate::session::Session;
use crate::store::DataStore;
use std::str::FromStr;

pub struct MandalaApi<S: DataStore> {
    store: S,
    paths: commands::MandalaPaths,
    palette: Palette,
    grid: GridStore,
    session: Session,
}

impl<S: DataStore> MandalaApi<S> {
    /// Loads (or generates) the grid for `variant` and starts with no session.
    pub fn open(
        mut store: S,
        paths: commands::MandalaPaths,
        variant: Variant,
        palette: Palette,
    ) -> Result<Self> {
        let grid = commands::open::run(&mut store, variant, &palette)?;
        Ok(Self {
            store,
            paths,
            palette,
            grid: GridStore::new(grid),
            session: Session::new(),
        })
    }

    pub fn variant(&self) -> Variant {
        self.grid.get().variant()
    }

    pub fn grid(&self) -> &Grid {
        self.grid.get()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn paths(&self) -> &commands::MandalaPaths {
        &self.paths
    }

    /// The render view of every cell, in global order.
    pub fn cells(&self) -> Vec<CellView> {
        cell_views(self.grid.get())
    }

    pub fn view_cells<I: AsRef<str>>(&self, refs: &[I]) -> Result<commands::CmdResult> {
        let globals = self.resolve_all(refs)?;
        Ok(commands::view::run(self.grid.get(), &globals))
    }

    pub fn begin_edit(&mut self, cell: &str) -> Result<commands::EditTarget> {
        let global = self.resolve(cell)?;
        Ok(commands::edit::begin(&self.grid, &mut self.session, global))
    }

    pub fn save_edit(&mut self, update: commands::CardUpdate) -> Result<commands::CmdResult> {
        commands::edit::save(&mut self.store, &mut self.grid, &mut self.session, update)
    }

    pub fn cancel_edit(&mut self) -> commands::CmdResult {
        commands::edit::cancel(&mut self.session)
    }

    pub fn begin_drag(&mut self, cell: &str) -> Result<commands::CmdResult> {
        let global = self.resolve(cell)?;
        Ok(commands::arrange::begin_drag(&self.grid, &mut self.session, global))
    }

    pub fn drop_on(&mut self, cell: &str) -> Result<commands::CmdResult> {
        let global = match self.resolve(cell) {
            Ok(global) => global,
            Err(err) => {
                self.session.take_drag();
                return Err(err);
            }
        };
        commands::arrange::drop_on(&mut self.store, &mut self.grid, &mut self.session, global)
    }

    /// A drag from `from` followed by a drop on `to`. A drag left held by an
    /// earlier `begin_drag` is discarded first.
    pub fn move_cell(&mut self, from: &str, to: &str) -> Result<commands::CmdResult> {
        let from_global = self.resolve(from)?;
        let to_global = self.resolve(to)?;
        self.session.take_drag();
        let picked = commands::arrange::begin_drag(&self.grid, &mut self.session, from_global);
        if self.session.dragged() != Some(from_global) {
            return Ok(picked);
        }
        commands::arrange::drop_on(&mut self.store, &mut self.grid, &mut self.session, to_global)
    }

    pub fn reset(&mut self, request: commands::ResetRequest) -> Result<commands::CmdResult> {
        commands::reset::run(
            &mut self.store,
            &mut self.grid,
            &mut self.session,
            &self.palette,
            request,
        )
    }

    pub fn info(&self) -> Result<commands::CmdResult> {
        let variant = self.variant();
        let storage_key = variant.storage_key();
        let info = commands::GridInfo {
            variant,
            cell_count: variant.shape().cell_count(),
            storage_path: self.store.slot_path(&storage_key)?,
            storage_key,
            capture_region_id: variant.capture_region_id(),
        };
        Ok(commands::CmdResult::default().with_grid_info(info))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    fn resolve(&self, cell: &str) -> Result<usize> {
        CellRef::from_str(cell.trim())?.resolve(&self.grid.get().shape())
    }

    fn resolve_all<I: AsRef<str>>(&self, refs: &[I]) -> Result<Vec<usize>> {
        let shape = self.grid.get().shape();
        let mut globals = Vec::new();
        for input in refs {
            for cell in parse_cell_or_range(input.as_ref().trim())? {
                globals.push(cell.resolve(&shape)?);
            }
        }
        Ok(globals)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CardUpdate, CmdMessage, CmdResult, EditTarget, GridInfo, MandalaPaths, MessageLevel,
    ResetRequest,
};
