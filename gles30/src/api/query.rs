//! Query and sync objects.

use gles30_sys::gl::types::*;

use crate::marshal::{count, from_gl_bool};
use crate::Gles;

impl Gles {
    /// `glGenQueries`, fills every slot of `ids`.
    #[inline]
    pub unsafe fn gen_queries(&self, ids: &mut [GLuint]) {
        unsafe { self.api.GenQueries(count(ids), ids.as_mut_ptr()) }
    }

    /// `glDeleteQueries`.
    #[inline]
    pub unsafe fn delete_queries(&self, ids: &[GLuint]) {
        unsafe { self.api.DeleteQueries(count(ids), ids.as_ptr()) }
    }

    /// `glIsQuery`.
    #[inline]
    pub unsafe fn is_query(&self, id: GLuint) -> bool {
        from_gl_bool(unsafe { self.api.IsQuery(id) })
    }

    /// `glBeginQuery`.
    #[inline]
    pub unsafe fn begin_query(&self, target: GLenum, id: GLuint) {
        unsafe { self.api.BeginQuery(target, id) }
    }

    /// `glEndQuery`.
    #[inline]
    pub unsafe fn end_query(&self, target: GLenum) {
        unsafe { self.api.EndQuery(target) }
    }

    /// `glGetQueryiv`.
    #[inline]
    pub unsafe fn get_queryiv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]) {
        unsafe { self.api.GetQueryiv(target, pname, params.as_mut_ptr()) }
    }

    /// `glGetQueryObjectuiv`.
    #[inline]
    pub unsafe fn get_query_objectuiv(&self, id: GLuint, pname: GLenum, params: &mut [GLuint]) {
        unsafe { self.api.GetQueryObjectuiv(id, pname, params.as_mut_ptr()) }
    }

    /// `glFenceSync`, returns a null sync on failure.
    #[inline]
    pub unsafe fn fence_sync(&self, condition: GLenum, flags: GLbitfield) -> GLsync {
        unsafe { self.api.FenceSync(condition, flags) }
    }

    /// `glDeleteSync`.
    #[inline]
    pub unsafe fn delete_sync(&self, sync: GLsync) {
        unsafe { self.api.DeleteSync(sync) }
    }

    /// `glIsSync`.
    #[inline]
    pub unsafe fn is_sync(&self, sync: GLsync) -> bool {
        from_gl_bool(unsafe { self.api.IsSync(sync) })
    }

    /// `glClientWaitSync`, blocks in the driver for at most `timeout`
    /// nanoseconds.
    ///
    /// Returns `ALREADY_SIGNALED`, `CONDITION_SATISFIED`, `TIMEOUT_EXPIRED`
    /// or `WAIT_FAILED` as reported by the driver.
    #[inline]
    pub unsafe fn client_wait_sync(&self, sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum {
        unsafe { self.api.ClientWaitSync(sync, flags, timeout) }
    }

    /// `glWaitSync`, `timeout` must be `TIMEOUT_IGNORED`.
    #[inline]
    pub unsafe fn wait_sync(&self, sync: GLsync, flags: GLbitfield, timeout: GLuint64) {
        unsafe { self.api.WaitSync(sync, flags, timeout) }
    }

    /// `glGetSynciv`, returns how many values were written.
    #[inline]
    pub unsafe fn get_synciv(&self, sync: GLsync, pname: GLenum, values: &mut [GLint]) -> GLsizei {
        let mut length = 0;
        unsafe { self.api.GetSynciv(sync, pname, count(values), &mut length, values.as_mut_ptr()) };
        length
    }
}
