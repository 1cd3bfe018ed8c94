//! Shared record handles and the serializable contract.

use crate::{Fields, LinkByUid, Result, Uids};
use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// The uniform shape every serializable record exposes.
///
/// A record is an *entity* when [`Serializable::uids`] returns `Some`;
/// entities are indexed, linked and flattened into the context. Records
/// without uids (values, bounds, attributes) are tagged on the wire but always
/// serialized in place.
pub trait Serializable: Any + fmt::Debug {
    /// Fixed type tag written to the `"type"` field.
    fn type_tag(&self) -> &str;

    /// The record's fields, without the type tag.
    fn fields(&self) -> Fields;

    fn uids(&self) -> Option<&Uids> {
        None
    }

    fn uids_mut(&mut self) -> Option<&mut Uids> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Pure construction from a field map.
///
/// Implementations check field shapes only; they never resolve links against
/// other entities.
pub trait FromFields: Sized {
    fn from_fields(fields: Fields) -> Result<Self>;
}

/// Builds a record handle from its fields. Stored in the type registry.
pub type Constructor = Arc<dyn Fn(Fields) -> Result<Obj> + Send + Sync>;

/// Constructor for a concrete record type.
#[must_use]
pub fn constructor<T: Serializable + FromFields>() -> Constructor {
    Arc::new(|fields| T::from_fields(fields).map(Obj::new))
}

/// A shared, mutable handle to a record.
///
/// Identity is the allocation: two handles are the same record iff
/// [`Obj::ptr_eq`] holds. The engine mutates records through the handle only to
/// assign missing uids.
#[derive(Clone)]
pub struct Obj(Rc<RefCell<dyn Serializable>>);

impl Obj {
    pub fn new<T: Serializable>(record: T) -> Self {
        Self(Rc::new(RefCell::new(record)))
    }

    /// Address of the shared allocation, used as an identity key.
    #[must_use]
    pub fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Obj) -> bool {
        self.addr() == other.addr()
    }

    pub fn borrow(&self) -> Ref<'_, dyn Serializable> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, dyn Serializable> {
        self.0.borrow_mut()
    }

    #[must_use]
    pub fn type_tag(&self) -> String {
        self.0.borrow().type_tag().to_string()
    }

    #[must_use]
    pub fn is_entity(&self) -> bool {
        self.0.borrow().uids().is_some()
    }

    /// Snapshot of the record's uids; `None` for non-entities.
    #[must_use]
    pub fn uids(&self) -> Option<Uids> {
        self.0.borrow().uids().cloned()
    }

    #[must_use]
    pub fn fields(&self) -> Fields {
        self.0.borrow().fields()
    }

    /// Link to this entity, if it is one and has a uid.
    #[must_use]
    pub fn link(&self, preferred_scope: Option<&str>) -> Option<LinkByUid> {
        self.0
            .borrow()
            .uids()
            .and_then(|uids| uids.link(preferred_scope))
    }

    /// Assigns a random uid under `scope` if this is an entity without one.
    ///
    /// Returns true if the record was mutated.
    pub fn ensure_uid(&self, scope: &str) -> bool {
        let mut record = self.0.borrow_mut();
        match record.uids_mut() {
            Some(uids) => uids.ensure(scope),
            None => false,
        }
    }

    pub fn is<T: Serializable>(&self) -> bool {
        self.0.borrow().as_any().is::<T>()
    }

    /// Borrows the record as its concrete type.
    pub fn downcast_ref<T: Serializable>(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.0.borrow(), |r| r.as_any().downcast_ref::<T>()).ok()
    }

    /// Mutably borrows the record as its concrete type.
    pub fn downcast_mut<T: Serializable>(&self) -> Option<RefMut<'_, T>> {
        RefMut::filter_map(self.0.borrow_mut(), |r| r.as_any_mut().downcast_mut::<T>()).ok()
    }
}

// Shallow on purpose: record graphs may be cyclic.
impl fmt::Debug for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(record) => f
                .debug_struct("Obj")
                .field("type", &record.type_tag())
                .field("uids", &record.uids())
                .finish(),
            Err(_) => f.write_str("Obj(<borrowed>)"),
        }
    }
}
