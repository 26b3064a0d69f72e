use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

/// Token de cancelación por intento de fetch
///
/// Los clones comparten el mismo flag: quien reemplaza el intento llama a
/// `cancel()` y la continuación async comprueba `is_cancelled()` antes de
/// tocar el estado.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    attempt: u64,
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new(attempt: u64) -> Self {
        Self {
            attempt,
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    /// Número de intento al que pertenece este token
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Ejecuta `commit` solo si el intento sigue vigente
    pub fn run_unless_cancelled<R>(&self, commit: impl FnOnce() -> R) -> Option<R> {
        if self.is_cancelled() {
            None
        } else {
            Some(commit())
        }
    }
}

/// Recursos de un intento que se liberan juntos en la limpieza del efecto
///
/// `release()` cancela el token, suelta el timer (un `Timeout` soltado no
/// llega a dispararse) y ejecuta el abort del transporte.
pub struct AttemptGuard {
    token: CancellationToken,
    timer: Option<Box<dyn Any>>,
    abort: Option<Box<dyn FnOnce()>>,
}

impl AttemptGuard {
    pub fn new(token: CancellationToken) -> Self {
        Self {
            token,
            timer: None,
            abort: None,
        }
    }

    pub fn with_timer(mut self, timer: impl Any) -> Self {
        self.timer = Some(Box::new(timer));
        self
    }

    pub fn with_abort(mut self, abort: impl FnOnce() + 'static) -> Self {
        self.abort = Some(Box::new(abort));
        self
    }

    pub fn release(mut self) {
        self.token.cancel();
        drop(self.timer.take());
        if let Some(abort) = self.abort.take() {
            abort();
        }
    }
}

impl PartialEq for CancellationToken {
    fn eq(&self, other: &Self) -> bool {
        self.attempt == other.attempt && Rc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}
