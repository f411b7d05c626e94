//! Case mapping under an allocator that fails on demand.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::ptr;
use unitext::{
    case_map, case_map_into, to_titlecase, CaseMapError, CaseMapOptions, Casing, NormalizationForm,
};

thread_local! {
    static ARMED: Cell<bool> = const { Cell::new(false) };
    /// Allocations still permitted while armed.
    static ALLOWED: Cell<usize> = const { Cell::new(0) };
    /// Live allocations made by this thread.
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn permit() -> bool {
    let armed = ARMED.try_with(Cell::get).unwrap_or(false);
    if !armed {
        return true;
    }
    ALLOWED
        .try_with(|allowed| match allowed.get() {
            0 => false,
            n => {
                allowed.set(n - 1);
                true
            }
        })
        .unwrap_or(true)
}

fn track(delta: isize) {
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

struct FailingAlloc;

unsafe impl GlobalAlloc for FailingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if !permit() {
            return ptr::null_mut();
        }
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            track(1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        track(-1);
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if !permit() {
            return ptr::null_mut();
        }
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static A: FailingAlloc = FailingAlloc;

/// Runs `f` with at most `allowed` allocations succeeding, returning its
/// result and the number of allocations it left behind.
fn with_allowed_allocations<R>(allowed: usize, f: impl FnOnce() -> R) -> (R, isize) {
    let before = LIVE.with(Cell::get);
    ALLOWED.with(|cell| cell.set(allowed));
    ARMED.with(|cell| cell.set(true));
    let result = f();
    ARMED.with(|cell| cell.set(false));
    let leaked = LIVE.with(Cell::get) - before;
    (result, leaked)
}

fn is_out_of_memory<T>(result: &Result<T, CaseMapError>) -> bool {
    matches!(result, Err(CaseMapError::OutOfMemory(_)))
}

#[test]
fn fails_on_first_allocation() {
    let input = "HELLO".as_bytes();
    let (result, leaked) =
        with_allowed_allocations(0, || case_map(input, &Casing::LOWER, &CaseMapOptions::new()));
    assert!(is_out_of_memory(&result));
    assert_eq!(0, leaked);
}

#[test]
fn fails_on_growth() {
    let input = "A".repeat(200);
    let (result, leaked) = with_allowed_allocations(1, || {
        case_map(input.as_bytes(), &Casing::LOWER, &CaseMapOptions::new())
    });
    assert!(is_out_of_memory(&result));
    assert_eq!(0, leaked);
}

#[test]
fn fails_while_normalizing() {
    let input: Vec<u16> = "\u{00C5}ngstr\u{00F6}m".encode_utf16().collect();
    let options = CaseMapOptions::new().normalize_after(NormalizationForm::Nfd);
    let (result, leaked) =
        with_allowed_allocations(1, || case_map(&input, &Casing::UPPER, &options));
    assert!(is_out_of_memory(&result));
    assert_eq!(0, leaked);
}

#[test]
fn titlecase_fails_on_break_array() {
    let input = "hello world".as_bytes();
    let (result, leaked) =
        with_allowed_allocations(0, || to_titlecase(input, &CaseMapOptions::new()));
    assert!(is_out_of_memory(&result));
    assert_eq!(0, leaked);
}

#[test]
fn caller_buffer_is_cleared_on_failure() {
    let input = "\u{00DF}".repeat(100);
    let mut out: Vec<u8> = Vec::with_capacity(16);
    out.extend_from_slice(b"stale");
    let (result, leaked) = with_allowed_allocations(0, || {
        case_map_into(input.as_bytes(), &Casing::UPPER, &CaseMapOptions::new(), &mut out)
    });
    assert!(is_out_of_memory(&result));
    assert!(out.is_empty());
    assert_eq!(0, leaked);
}

#[test]
fn succeeds_without_allocating_into_large_buffer() {
    let mut out: Vec<u8> = Vec::with_capacity(64);
    let (result, leaked) = with_allowed_allocations(0, || {
        case_map_into(b"stra\xC3\x9Fe", &Casing::UPPER, &CaseMapOptions::new(), &mut out)
    });
    assert_eq!(Ok(()), result);
    assert_eq!(b"STRASSE", &out[..]);
    assert_eq!(0, leaked);
}

#[test]
fn succeeds_and_frees_with_enough_memory() {
    let input = "ΟΔΥΣΣΕΥΣ".repeat(20);
    let (result, leaked) = with_allowed_allocations(8, || {
        case_map(input.as_bytes(), &Casing::LOWER, &CaseMapOptions::new())
            .map(|lower| String::from_utf8_lossy(&lower).chars().last())
    });
    assert_eq!(Ok(Some('\u{03C2}')), result);
    assert_eq!(0, leaked);
}
