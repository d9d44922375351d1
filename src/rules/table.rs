/// Default grapheme rule table, embedded at build time.
///
/// Keys are romanized clusters, case-sensitive where case carries phonemic
/// meaning: retroflex and prenasalized registers are selected by a capital
/// letter (`N` ණ vs `n` න, `B` ඹ vs `b` බ), dentals by a trailing `h`
/// (`th` ත vs `t` ට), aspirates likewise (`kh`, `gh`, `Th`, `Dh`, …), and
/// long vowels by doubling the vowel letter. `thr` carries the rakaransaya
/// conjunct (al-lakuna + ZWJ + ර) as a single cluster.
pub const DEFAULT_TOML: &str = r#"
[consonants]
b = "බ"
bh = "භ"
B = "ඹ"
c = "ච"
ch = "ච"
Ch = "ඡ"
d = "ඩ"
D = "ඬ"
dh = "ද"
Dh = "ධ"
f = "ෆ"
g = "ග"
gh = "ඝ"
G = "ඟ"
h = "හ"
j = "ජ"
jh = "ඣ"
k = "ක"
kh = "ඛ"
l = "ල"
L = "ළ"
m = "ම"
n = "න"
N = "ණ"
p = "ප"
ph = "ඵ"
r = "ර"
s = "ස"
sh = "ශ"
Sh = "ෂ"
t = "ට"
T = "ඨ"
th = "ත"
Th = "ථ"
thr = "ත\u0DCA\u200Dර"
v = "ව"
w = "ව"
y = "ය"

[vowels]
a = { independent = "අ", dependent = "" }
A = { independent = "අ", dependent = "" }
aa = { independent = "ආ", dependent = "ා" }
ae = { independent = "ඇ", dependent = "ැ" }
aee = { independent = "ඈ", dependent = "ෑ" }
aae = { independent = "ඈ", dependent = "ෑ" }
ai = { independent = "ඓ", dependent = "ෛ" }
au = { independent = "ඖ", dependent = "ෞ" }
e = { independent = "එ", dependent = "ෙ" }
ee = { independent = "ඒ", dependent = "ේ" }
i = { independent = "ඉ", dependent = "ි" }
ii = { independent = "ඊ", dependent = "ී" }
o = { independent = "ඔ", dependent = "ො" }
oo = { independent = "ඕ", dependent = "ෝ" }
u = { independent = "උ", dependent = "ු" }
uu = { independent = "ඌ", dependent = "ූ" }

[signs]
Q = "ං"
QQ = "ං"
"#;
