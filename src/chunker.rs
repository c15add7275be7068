//! Gear-based content-defined chunking.
//!
//! Splits a byte stream into variable-length chunks at content-dependent
//! boundaries so that local edits only perturb the chunks touching the
//! edit, which is what lets the Data-ID's MinHash-over-chunk-hashes stay
//! stable under small insertions/deletions. Two size regimes are used: the
//! first 100 chunks use a small target size so Data-ID stays sensitive to
//! near-duplicates on the small inputs most files actually are, after which
//! the chunker switches to a much larger target size for throughput on
//! long tails.

use std::io::Read;

/// Gear hash mixing table, one 64-bit value per byte value (256 entries).
/// Generated with the same splitmix64 stream documented in
/// [`crate::minhash`], continued past the MinHash coefficients.
pub static GEAR: [u64; 256] = [
    0x0CA0F6F31FEE0AF2, 0x2BAEDD9834FCBDC3, 0xCB50D93BF5436722, 0x9E092740B57FF9A5,
    0x52F366530B0339F7, 0xDBA0BC96232BA0A5, 0x446371EA48930E05, 0x38FD2DDC61AF343B,
    0xAEE8E88D8A42156B, 0x8B1A30DD28B90EC0, 0x065FB949B66B442B, 0x0F140E2DD5E8AE3D,
    0x8A7CAA96D55CB5C1, 0x38F0231B6ED3165F, 0xB879305054E4FC61, 0xDEB9C37744E1600D,
    0x5384FF707F60EF17, 0xBF93A1BD4D16B84C, 0xE0ABABDB31320748, 0xBAE9491E7837460C,
    0x07AF0339ABFD4FCB, 0xBA464809629F9947, 0xECFFA49EA6FF203B, 0x7872C17DCA390547,
    0x9AD6DFDE69F91740, 0x41B5DB3884C14447, 0xB9E63A744688DF59, 0x0B9B59E92C55464A,
    0xEB55D26128A90BE1, 0x7A1E8224A5A39D27, 0xD16AEEA9B5E8DC65, 0x98FC0EDBC28258BB,
    0xD471234F68B67695, 0x7CB33EDDF872E84E, 0x959EBBA291D54CA8, 0x2FE5A1D608D2873A,
    0x0D8DAB65A42E5C39, 0x7001E2D30F9A7A46, 0x2F5EEE617599C135, 0xF7EA6B2F95816ABB,
    0xEBDAAF58AD2D115A, 0xA2080BE5B9D5E6B1, 0xB69F7FB8645050AA, 0xF0C64AA99047AA35,
    0xE6E20869F986BDD2, 0x74B4E515EDE21044, 0xD62C6A68D2B1299E, 0x10C910F980F80AE8,
    0x9457B3CAD6FA6D5C, 0xD3499A2ADEB49D70, 0x72F4DE8A86CEDF3B, 0x8FF594506138164E,
    0x985C7AFE5AC0D181, 0x86534D60591131A2, 0x8B3ADF95B474A3CE, 0x3549C6C01E861061,
    0x16A765A4D73FC1A5, 0x7C3D5F0858ADBBB3, 0xCD98C99D784DEE06, 0x0E090A89B41FA45D,
    0x4DA67E3C4EF21C70, 0x4EA72C90AC1BB0D1, 0x1275F34BA6EEEDC4, 0x3FB6AB8F0BC16FEA,
    0x7808B29B0E90419D, 0x81019CF7BD2B6A48, 0xD9654829FA9B66CD, 0xC21B54D464931A56,
    0x8B6BCAF9011B7359, 0xD598B99DBD2D8CDF, 0xAB6763A1170A9876, 0xD2CD82850B0AE849,
    0xB2E7338DCD1D8E2A, 0x8E3A34254EB85560, 0x9376009BC0C5F15C, 0xFD560DEEACE1F2FF,
    0x27B5DE77B1A88EAE, 0xAC1AE67A3AE5317E, 0x165B483A9D626C73, 0x0C7F1A1247ACECAA,
    0xEB062BCFBB891288, 0x91F1BEACAA36B65F, 0xD7FF723DD46C4F90, 0x46B9AC82027CCDBB,
    0x453A658F3B4A3F66, 0x4CD2D22A7A9AC29E, 0x70156C00F9EF74FD, 0x821B67C2A07B63D3,
    0x07BAE385F81BD8AA, 0xF05A943B48EB4B2F, 0xC0AC9C47DFD34F86, 0x810F059701958AE3,
    0x8EA003A2A24667F0, 0x81E6C025DB093D21, 0xD543C467D9B4BFE0, 0x0955804B9037992D,
    0x3AB202E804094E43, 0x0F5C74DB01D01AAC, 0x3E3AFB4E4F7B9BBA, 0x60B537D7379A310B,
    0x654BC377B61DF797, 0x8A5157FE641060F9, 0x70E6AA6A095BA679, 0x16AA0AB72AF0BB96,
    0x0F582F1BCD972595, 0xE7C445F749BF51AD, 0x1189D3AE944E4089, 0x0FDB0C6FEE031DCC,
    0x7A9B143FFDCBD320, 0x10B9AF4EE613AA76, 0x39D1F7247DAF7A12, 0x420C2C9AB7170801,
    0x068C26A6F9A8D617, 0xBBF034DAE059434F, 0x115A743280A06C9E, 0x6C92384E491F2081,
    0x2583F5FDC5426B78, 0x8751ECF5D4EAE3CD, 0xF5995B1A0AF53E63, 0xD40B235B8779DED5,
    0x16C2554CDBF0F4E1, 0x8A5EC2AB1F30C95B, 0xE92F6F316382AFD4, 0xB53A554A84745D5D,
    0x2CA84EF924120470, 0x0C9447B5A6316BEE, 0xEB8BD19E53E42D8D, 0x72AD33724509E148,
    0x0B5F67AB94BD1BC4, 0xB70D3B9FDFCC2E7D, 0x72A95042ED1D7AB6, 0x6216F778336D30A2,
    0x1755FB25A8D0915E, 0xFB10A63AF0C988E4, 0x33038253E7FB89F9, 0xDE80D65E40959349,
    0xEE79B5E86D43D606, 0xC08C4F77CF309507, 0x9517D27C55E1030D, 0x8FE1650F216DACDB,
    0xB8E51E75AE0E7A57, 0x68AD8902A1A9E9F7, 0x453F27E1518A92E3, 0xE3C659A6C51178F3,
    0xEEE2121176E21550, 0x00C193982F3E8E26, 0x91A053B0C27234E0, 0x5DE5C5EB111ECD2C,
    0xB001A2D309002725, 0xFB4D1F17F7286601, 0x13A29B67BC37CD9A, 0x5398F0A5D16A2DCE,
    0x5148CDB24B5BB566, 0x1D73F478CA983CBD, 0xC56085FCA16E6824, 0xD9AB969C239B22C3,
    0xEFA9D1AD49E086F3, 0x9B38CE69F652AA97, 0xEB71A57044C5A30D, 0x7B563E872AECD1CD,
    0xF751D7B1E84BAFC1, 0x98D53B0E45A93E76, 0xB5317B71EF749C32, 0x966AE6081E880486,
    0xD52E4925F195C192, 0x54FFE6088B31E217, 0x8B51ECA1B93A45A3, 0xBA87363E04F317C0,
    0x5E4D3AE227DB9186, 0x07AB9E83DBCE3356, 0x29BD3F29C395F7A9, 0xFDBF56D9A15A2A94,
    0xBA2AB95575218912, 0xC5C6E29B0FA9D477, 0x4C1E94E287E7A664, 0xFF37A3285E54F395,
    0x66664A3EDB4575B0, 0xEB26721276F4A2EB, 0x1F51CEC6147698E1, 0x756C8BAF441C7870,
    0xC61136CDB7DD4A46, 0xA91014015846188D, 0x07EF74EA21DA38F4, 0x2715C5A52DBDA015,
    0x57D7172ED22E240C, 0xAB629FE3E4B4B519, 0xB19852982015CDD9, 0xC743E7399F822AF2,
    0x5E1F3CA5A623DD86, 0x3852F0F0BC52D234, 0xF25702A1DCFB66F0, 0x86C0C469D59ACDE8,
    0x457D7C68D5191EE2, 0x1C49633F10799DC8, 0x0C5D19023A577272, 0x5793A70E70829C8C,
    0xEAD3E0C9E0D18BE7, 0xA546EE896BC10D16, 0x863017E90B509794, 0xDE9E83089F53FDFA,
    0x0BB2ACCB0677D641, 0x45D3C3F4E086AF16, 0xCCE33C3357FE8C11, 0x83B46F899145C0F2,
    0x4EB757A3AACA8B8C, 0xCA6DC80D982F90EA, 0xF242894B4A6E32AE, 0x79D0A0A6C9BD0C0D,
    0x08E4776B90519C12, 0xD25E9B426372DA67, 0x3053BE1B89E097E3, 0xA730027FC469CCB8,
    0x0E1DD69CCA303DA1, 0xED7B679AFABF523E, 0x076EA9A9D6E2F4C5, 0x084773984D48CED0,
    0x39D5C32F40386674, 0x1C58D4373EF3661E, 0xD37DD21EFAF002FC, 0x8C4DFCA02BC6B56D,
    0xC063C428CAE56B8A, 0xC3B94E4A42A813AE, 0xBE4B4C1A9A298923, 0xEFA429D371482954,
    0xC2E0A451FFD8BC3B, 0x1E6D8DD5EDAA776D, 0x80F8338B4DED8025, 0x0815DDD6376E9BB6,
    0xD6A575709D8C0D80, 0xBFF41A56C3866EE7, 0x1365509C55C60626, 0x89DF199983862E0B,
    0x269EAE4CAE06CA51, 0x8168F96503E1DF67, 0x2E277C05D92F9D4D, 0xD25F303F1DB053EB,
    0x230D9C291A69A86E, 0xD296311BA9C5729A, 0xFB9F3B06BC8DEF10, 0x92EC912DE6C82863,
    0x5B7C4E36A406D012, 0x2AB734B60D88C38C, 0x3C32F5A9998100C7, 0x1896590761883DB2,
    0x54188FA887533F95, 0x88D173F7AB56A1B9, 0x4042C5F83D2A1BF2, 0x5555A100DD501731,
    0xEBEA0EB7A69153DC, 0x4E66200F43360521, 0xA6864357939E3479, 0xCC56FFC7A9035165,
    0x65E719EB514E32B3, 0x257CEB0C05604E6C, 0xC5F3C2098109E272, 0xBA09B96243ACFD51,
];

/// Chunk index after which the chunker switches from the small to the
/// large size regime.
const STAGE_SWITCH_INDEX: usize = 100;

#[derive(Clone, Copy)]
struct Regime {
    norm: usize,
    min: usize,
    max: usize,
    mask1: u64,
    mask2: u64,
}

const SMALL_REGIME: Regime = Regime {
    norm: 40,
    min: 20,
    max: 640,
    mask1: 0x0001_6118,
    mask2: 0x0000_A0B1,
};

const LARGE_REGIME: Regime = Regime {
    norm: 4096,
    min: 2048,
    max: 65536,
    mask1: 0x0003_5907_0353_0000,
    mask2: 0x0000_D900_0353_0000,
};

/// Apply the boundary algorithm to a fully-buffered chunk candidate and
/// return the cut length. `data` may be shorter than `regime.max` only when
/// the stream itself is exhausted.
fn find_cut(data: &[u8], regime: Regime) -> usize {
    if data.len() <= regime.min {
        return data.len();
    }

    let mut pattern: u64 = 0;
    let mut i = regime.min;

    let norm_bound = regime.norm.min(data.len());
    while i < norm_bound {
        pattern = (pattern << 1).wrapping_add(GEAR[data[i] as usize]);
        if pattern & regime.mask1 == 0 {
            return i;
        }
        i += 1;
    }

    let max_bound = regime.max.min(data.len());
    while i < max_bound {
        pattern = (pattern << 1).wrapping_add(GEAR[data[i] as usize]);
        if pattern & regime.mask2 == 0 {
            return i;
        }
        i += 1;
    }

    i
}

/// Streaming gear chunker. Wraps any [`Read`] and yields content-defined
/// chunks as owned `Vec<u8>`s via [`Chunker::next_chunk`].
pub struct Chunker<R: Read> {
    reader: R,
    chunk_index: usize,
    carry: Vec<u8>,
    eof: bool,
}

impl<R: Read> Chunker<R> {
    pub fn new(reader: R) -> Self {
        Chunker { reader, chunk_index: 0, carry: Vec::new(), eof: false }
    }

    fn regime(&self) -> Regime {
        if self.chunk_index < STAGE_SWITCH_INDEX {
            SMALL_REGIME
        } else {
            LARGE_REGIME
        }
    }

    /// Top up `self.carry` from the reader until it holds `target` bytes or
    /// the stream is exhausted.
    fn fill_to(&mut self, target: usize) -> std::io::Result<()> {
        if self.eof {
            return Ok(());
        }
        while self.carry.len() < target {
            let start = self.carry.len();
            self.carry.resize(target, 0);
            let n = self.reader.read(&mut self.carry[start..])?;
            self.carry.truncate(start + n);
            if n == 0 {
                self.eof = true;
                break;
            }
        }
        Ok(())
    }

    /// Read and return the next chunk, or `None` once the stream and
    /// carry buffer are both empty.
    pub fn next_chunk(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        let regime = self.regime();
        self.fill_to(regime.max)?;

        if self.carry.is_empty() {
            return Ok(None);
        }

        let cut = find_cut(&self.carry, regime);
        let chunk = self.carry[..cut].to_vec();
        self.carry.drain(..cut);
        self.chunk_index += 1;
        Ok(Some(chunk))
    }
}

/// Collect every chunk from `reader` into a `Vec<Vec<u8>>`.
pub fn data_chunks<R: Read>(reader: R) -> std::io::Result<Vec<Vec<u8>>> {
    let mut chunker = Chunker::new(reader);
    let mut chunks = Vec::new();
    while let Some(chunk) = chunker.next_chunk()? {
        chunks.push(chunk);
    }
    Ok(chunks)
}
