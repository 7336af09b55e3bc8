use num_complex::Complex32 as C32;
use pyo3::{exceptions::PyValueError, prelude::*, Bound};
use numpy::{PyArray1, PyReadonlyArray1};

use crate::config::{ModemConfig, ModemError, SidebandType};
use crate::demodulate::AmDemod;
use crate::modulate::AmMod;

fn to_py_err(e: ModemError) -> PyErr { PyValueError::new_err(e.to_string()) }

fn build_config(m: f32, sideband: &str, suppressed: bool, carrier_offset: f32) -> PyResult<ModemConfig> {
    let sb: SidebandType = sideband.parse().map_err(to_py_err)?;
    Ok(ModemConfig::new(m, sb, suppressed).with_carrier_offset(carrier_offset))
}

#[pyclass(name = "AmModulator")]
struct PyAmMod {
    inner: AmMod,
}

#[pymethods]
impl PyAmMod {
    #[new]
    #[pyo3(signature = (modulation_index, sideband="dsb", suppressed_carrier=false, carrier_offset=0.0))]
    fn new(modulation_index: f32, sideband: &str, suppressed_carrier: bool, carrier_offset: f32) -> PyResult<Self> {
        let cfg = build_config(modulation_index, sideband, suppressed_carrier, carrier_offset)?;
        Ok(Self { inner: AmMod::new(cfg).map_err(to_py_err)? })
    }

    fn delay(&self) -> usize { self.inner.delay() }
    fn reset(&mut self) { self.inner.reset(); }

    /// Modulate one chunk of f32 audio into complex64 baseband IQ.
    fn process<'py>(
        &mut self,
        py: Python<'py>,
        audio: PyReadonlyArray1<f32>,
    ) -> PyResult<Bound<'py, PyArray1<C32>>> {
        let audio = audio.as_slice()?;
        let mut iq = vec![C32::new(0.0, 0.0); audio.len()];
        self.inner.modulate_block(audio, &mut iq);
        Ok(PyArray1::from_vec_bound(py, iq))
    }
}

#[pyclass(name = "AmDemodulator")]
struct PyAmDemod {
    inner: AmDemod,
}

#[pymethods]
impl PyAmDemod {
    #[new]
    #[pyo3(signature = (modulation_index, sideband="dsb", suppressed_carrier=false, carrier_offset=0.0))]
    fn new(modulation_index: f32, sideband: &str, suppressed_carrier: bool, carrier_offset: f32) -> PyResult<Self> {
        let cfg = build_config(modulation_index, sideband, suppressed_carrier, carrier_offset)?;
        Ok(Self { inner: AmDemod::new(cfg).map_err(to_py_err)? })
    }

    fn delay(&self) -> usize { self.inner.delay() }
    fn reset(&mut self) { self.inner.reset(); }
    fn phase(&self) -> f32 { self.inner.phase() }
    fn frequency(&self) -> f32 { self.inner.frequency() }

    /// Demodulate one chunk of complex64 IQ into f32 audio (same length).
    fn process<'py>(
        &mut self,
        py: Python<'py>,
        iq: PyReadonlyArray1<C32>,
    ) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let iq = iq.as_slice()?;
        let mut audio = vec![0.0f32; iq.len()];
        self.inner.demodulate_block(iq, &mut audio);
        Ok(PyArray1::from_vec_bound(py, audio))
    }
}

#[pymodule]
fn am_modem(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAmMod>()?;
    m.add_class::<PyAmDemod>()?;
    m.add_function(wrap_pyfunction!(py_version, m)?)?;
    Ok(())
}

#[pyfunction]
#[pyo3(name = "version")]
fn py_version() -> &'static str { crate::version() }
